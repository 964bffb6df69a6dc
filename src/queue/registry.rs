//! Topic registry: maps topic names to their queues.
//!
//! The registry is the single owner of every [`TopicQueue`]. It is built
//! explicitly at startup and shared with the transport as `Arc<Registry>`.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::{Error, Result};
use super::topic::TopicQueue;
use super::types::{Item, QueueConfig};

/// Shared handle to a topic's queue, as returned by [`Registry::lookup`].
pub type QueueHandle = Arc<TopicQueue>;

/// The set of topics held by one running instance.
///
/// A single read-write lock guards the topic map; each queue carries its own
/// lock for its contents. Topics are never removed once created.
#[derive(Debug)]
pub struct Registry {
    topics: RwLock<HashMap<String, QueueHandle>>,
    max_topics: usize,
}

impl Registry {
    /// Create an empty registry that holds at most `max_topics` topics.
    pub fn new(max_topics: usize) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            max_topics,
        }
    }

    /// Create an empty registry from configuration.
    pub fn from_config(config: &QueueConfig) -> Self {
        Self::new(config.max_topics)
    }

    /// Register a new, empty topic.
    ///
    /// The capacity check runs before the duplicate check, so creating an
    /// existing name on a full registry reports [`Error::CapacityExceeded`].
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] when `max_topics` topics already exist
    /// - [`Error::TopicAlreadyExists`] when `name` is already registered
    pub fn create_topic(&self, name: &str) -> Result<()> {
        let mut topics = self.topics.write();

        if topics.len() >= self.max_topics {
            warn!(topic = %name, max_topics = self.max_topics, "topic limit reached");
            return Err(Error::CapacityExceeded {
                max: self.max_topics,
            });
        }

        if topics.contains_key(name) {
            warn!(topic = %name, "topic already exists");
            return Err(Error::topic_already_exists(name));
        }

        topics.insert(name.to_string(), Arc::new(TopicQueue::new(name)));
        info!(topic = %name, topics = topics.len(), "topic created");
        Ok(())
    }

    /// Find the queue for `name`. Never creates a topic.
    pub fn lookup(&self, name: &str) -> Option<QueueHandle> {
        self.topics.read().get(name).cloned()
    }

    /// Append `payload` to `topic` and return the stored item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TopicNotFound`] if the topic does not exist.
    pub fn insert(&self, topic: &str, payload: impl Into<String>) -> Result<Item> {
        let queue = self.require(topic)?;
        Ok(queue.insert(payload))
    }

    /// Remove and return the oldest item of `topic`.
    ///
    /// # Errors
    ///
    /// - [`Error::TopicNotFound`] if the topic does not exist
    /// - [`Error::QueueEmpty`] if the topic has no pending items
    pub fn get(&self, topic: &str) -> Result<Item> {
        let queue = self.require(topic)?;
        queue.get().ok_or_else(|| Error::queue_empty(topic))
    }

    /// Number of pending items in `topic`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TopicNotFound`] if the topic does not exist.
    pub fn length(&self, topic: &str) -> Result<usize> {
        Ok(self.require(topic)?.length())
    }

    /// Number of registered topics.
    pub fn topic_count(&self) -> usize {
        self.topics.read().len()
    }

    /// Configured upper bound on the number of topics.
    pub fn max_topics(&self) -> usize {
        self.max_topics
    }

    /// Whether no further topics can be created.
    pub fn is_full(&self) -> bool {
        self.topic_count() >= self.max_topics
    }

    /// All topic names, sorted.
    pub fn topic_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.topics.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn require(&self, topic: &str) -> Result<QueueHandle> {
        self.lookup(topic).ok_or_else(|| {
            debug!(topic = %topic, "lookup of unknown topic");
            Error::topic_not_found(topic)
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_config(&QueueConfig::default())
    }
}
