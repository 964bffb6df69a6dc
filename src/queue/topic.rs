//! Per-topic FIFO queue.

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::debug;

use super::types::Item;

/// Mutable state of a topic, guarded by the queue's lock.
#[derive(Debug)]
struct QueueState {
    items: VecDeque<Item>,
    next_id: u64,
}

/// An ordered queue of messages for a single topic.
///
/// Each queue owns its own lock, so operations on different topics never
/// contend. Insertions and removals are linearizable per queue: the id and
/// timestamp are assigned while the lock is held.
#[derive(Debug)]
pub struct TopicQueue {
    name: String,
    state: Mutex<QueueState>,
}

impl TopicQueue {
    /// Create an empty queue for `name`. The first inserted item gets id 1.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                next_id: 1,
            }),
        }
    }

    /// Name of the topic this queue belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a message and return the stored item.
    ///
    /// Depth is unbounded: a topic with producers and no consumer grows
    /// until the process runs out of memory.
    pub fn insert(&self, payload: impl Into<String>) -> Item {
        let mut state = self.state.lock();
        let item = Item {
            id: state.next_id,
            payload: payload.into(),
            timestamp: Utc::now(),
            topic: self.name.clone(),
        };
        state.next_id += 1;
        state.items.push_back(item.clone());

        debug!(topic = %self.name, id = item.id, length = state.items.len(), "message enqueued");
        item
    }

    /// Remove and return the oldest item, or `None` when the queue is empty.
    pub fn get(&self) -> Option<Item> {
        let mut state = self.state.lock();
        let item = state.items.pop_front();
        if let Some(ref item) = item {
            debug!(topic = %self.name, id = item.id, length = state.items.len(), "message dequeued");
        }
        item
    }

    /// Return a copy of the oldest item without removing it.
    pub fn peek(&self) -> Option<Item> {
        self.state.lock().items.front().cloned()
    }

    /// Number of pending items.
    pub fn length(&self) -> usize {
        self.state.lock().items.len()
    }

    /// The id the next inserted item will receive.
    pub fn next_id(&self) -> u64 {
        self.state.lock().next_id
    }
}
