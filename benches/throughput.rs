//! Throughput benchmarks for the topic registry.
//!
//! Benchmarks:
//! - Single-threaded insert/get round trips on one topic
//! - Concurrent producers on one topic (contention on a single queue lock)
//! - Concurrent producers on separate topics (no cross-topic contention)
//!
//! Run with:
//! ```bash
//! cargo bench --bench throughput
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use topicq::queue::Registry;

fn single_topic(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_topic");
    group.measurement_time(Duration::from_secs(5));

    for batch in [1usize, 64, 1024] {
        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("insert_get", batch), &batch, |b, &batch| {
            let registry = Registry::new(1);
            registry.create_topic("bench").unwrap();
            let queue = registry.lookup("bench").unwrap();

            b.iter(|| {
                for i in 0..batch {
                    black_box(queue.insert(format!("message {i}")));
                }
                for _ in 0..batch {
                    black_box(queue.get());
                }
            });
        });
    }

    group.finish();
}

fn concurrent_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_producers");
    group.sample_size(30);

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 1000) as u64));

        group.bench_with_input(BenchmarkId::new("shared_topic", threads), &threads, |b, &n| {
            let registry = Arc::new(Registry::new(1));
            registry.create_topic("shared").unwrap();

            b.iter(|| {
                let handles: Vec<_> = (0..n)
                    .map(|_| {
                        let registry = Arc::clone(&registry);
                        std::thread::spawn(move || {
                            for _ in 0..1000 {
                                registry.insert("shared", "payload").unwrap();
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
                while registry.get("shared").is_ok() {}
            });
        });

        group.bench_with_input(BenchmarkId::new("topic_per_thread", threads), &threads, |b, &n| {
            let registry = Arc::new(Registry::new(n));
            for t in 0..n {
                registry.create_topic(&format!("t{t}")).unwrap();
            }

            b.iter(|| {
                let handles: Vec<_> = (0..n)
                    .map(|t| {
                        let queue = registry.lookup(&format!("t{t}")).unwrap();
                        std::thread::spawn(move || {
                            for _ in 0..1000 {
                                queue.insert("payload");
                            }
                            while queue.get().is_some() {}
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, single_topic, concurrent_producers);
criterion_main!(benches);
