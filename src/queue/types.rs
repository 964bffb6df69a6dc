//! Core types for the topic queue engine.
//!
//! Contains the message record and the configuration for the registry.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::constants;

/// Serde helper for `DateTime<Utc>` as RFC3339 string.
pub(crate) mod datetime_rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// One message enqueued on a topic.
///
/// The `id` is assigned by the owning queue in arrival order and is never
/// reused, even after the item has been removed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Per-topic sequence number, starting at 1.
    pub id: u64,
    /// Message payload as supplied by the producer.
    #[serde(rename = "msg")]
    pub payload: String,
    /// Time the queue accepted the message.
    #[serde(with = "datetime_rfc3339")]
    pub timestamp: DateTime<Utc>,
    /// Name of the owning topic.
    pub topic: String,
}

/// Configuration for the topic registry.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueueConfig {
    /// Upper bound on the number of topics held at once.
    pub max_topics: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_topics: constants::DEFAULT_MAX_TOPICS,
        }
    }
}
