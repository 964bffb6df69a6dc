//! Prometheus metrics for queue operations.
//!
//! Recording goes through the `metrics` facade. Without an installed
//! recorder (library use, tests) every call is a no-op.
//!
//! Series carrying a `topic` label are only written for topics that exist
//! in the registry, so the label set stays within `max_topics`. Failed
//! requests are counted by operation and error kind only.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder and return a handle for rendering.
///
/// # Errors
///
/// Returns an error if a recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// Count one successful operation on an existing topic.
pub fn record_queue_operation(operation: &'static str, topic: &str) {
    metrics::counter!(
        "topicq_queue_operations_total",
        "operation" => operation,
        "topic" => topic.to_string()
    )
    .increment(1);
}

/// Count one failed operation.
pub fn record_queue_failure(operation: &'static str, kind: &'static str) {
    metrics::counter!(
        "topicq_queue_failures_total",
        "operation" => operation,
        "kind" => kind
    )
    .increment(1);
}

/// Record the current depth of an existing topic.
#[allow(clippy::cast_precision_loss)]
pub fn set_queue_length(topic: &str, length: usize) {
    metrics::gauge!("topicq_queue_length", "topic" => topic.to_string()).set(length as f64);
}

/// Record the number of registered topics.
#[allow(clippy::cast_precision_loss)]
pub fn set_topic_count(count: usize) {
    metrics::gauge!("topicq_topics").set(count as f64);
}
