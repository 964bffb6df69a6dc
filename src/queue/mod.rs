//! Named-topic in-memory FIFO queues.
//!
//! A [`Registry`] maps topic names to [`TopicQueue`]s and bounds how many
//! topics may exist. Each queue hands out per-topic ids starting at 1 and
//! returns items strictly oldest-first.
//!
//! # Examples
//!
//! ```rust
//! use topicq::queue::{Error, Registry};
//!
//! # fn main() -> Result<(), Error> {
//! let registry = Registry::new(25);
//! registry.create_topic("tasks")?;
//!
//! let first = registry.insert("tasks", "process this")?;
//! registry.insert("tasks", "then process this")?;
//! assert_eq!(first.id, 1);
//!
//! // Items come back in insertion order
//! let item = registry.get("tasks")?;
//! assert_eq!(item.payload, "process this");
//! assert_eq!(registry.length("tasks")?, 1);
//!
//! // Unknown topics are reported, never created implicitly
//! assert!(registry.lookup("unknown").is_none());
//! # Ok(())
//! # }
//! ```

mod error;
mod registry;
mod topic;
mod types;

pub use error::{Error, Result};
pub use registry::{QueueHandle, Registry};
pub use topic::TopicQueue;
pub use types::{Item, QueueConfig};
