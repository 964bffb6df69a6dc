//! Stress tests for concurrent producers and consumers.
//!
//! These tests validate ordering and id uniqueness when many clients hit
//! the same topics at once, both directly on the registry and over HTTP.
//!
//! The HTTP test is marked `#[ignore]` since it opens many connections.
//!
//! Run with:
//! ```bash
//! cargo test --test stress_tests -- --include-ignored
//! ```

#[path = "common.rs"]
mod common;

use common::TestServer;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tokio::sync::Barrier;
use topicq::queue::Registry;

#[test]
fn stress_concurrent_producers_and_consumers() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 1_000;

    let registry = Arc::new(Registry::new(1));
    registry.create_topic("load").unwrap();

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    registry.insert("load", format!("{p}:{i}")).unwrap();
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut taken = Vec::new();
                for _ in 0..PER_PRODUCER {
                    if let Ok(item) = registry.get("load") {
                        taken.push(item);
                    }
                }
                taken
            })
        })
        .collect();

    for p in producers {
        p.join().unwrap();
    }
    let mut taken: Vec<_> = consumers
        .into_iter()
        .flat_map(|c| c.join().unwrap())
        .collect();
    while let Ok(item) = registry.get("load") {
        taken.push(item);
    }

    assert_eq!(taken.len(), PRODUCERS * PER_PRODUCER);
    let ids: HashSet<u64> = taken.iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), PRODUCERS * PER_PRODUCER);

    // Each producer's messages must come out in the order they went in
    for p in 0..PRODUCERS {
        let prefix = format!("{p}:");
        let mut mine: Vec<_> = taken
            .iter()
            .filter(|i| i.payload.starts_with(&prefix))
            .collect();
        mine.sort_by_key(|i| i.id);
        let seq: Vec<usize> = mine
            .iter()
            .map(|i| i.payload[prefix.len()..].parse().unwrap())
            .collect();
        assert_eq!(seq, (0..PER_PRODUCER).collect::<Vec<_>>());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn stress_http_concurrent_sends() {
    const CLIENTS: usize = 50;
    const PER_CLIENT: usize = 20;

    let server = Arc::new(TestServer::start(25).await.expect("Failed to start server"));
    server.registry.create_topic("busy").unwrap();

    let barrier = Arc::new(Barrier::new(CLIENTS));
    let tasks: Vec<_> = (0..CLIENTS)
        .map(|c| {
            let server = Arc::clone(&server);
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                for i in 0..PER_CLIENT {
                    let resp = server
                        .client
                        .post(server.url("/topic"))
                        .json(&json!({"msg": format!("{c}-{i}"), "topic": "busy"}))
                        .send()
                        .await
                        .unwrap();
                    assert_eq!(resp.status(), 200);
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    let body: Value = server
        .client
        .get(server.url("/length?topic_name=busy"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["length"], CLIENTS * PER_CLIENT);

    let queue = server.registry.lookup("busy").unwrap();
    assert_eq!(queue.next_id(), (CLIENTS * PER_CLIENT) as u64 + 1);
}
