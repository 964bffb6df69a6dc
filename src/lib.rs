//! topicq - a named-topic in-memory FIFO message queue served over HTTP.
//!
//! Producers push messages onto named topics, consumers take the oldest
//! message of a topic, and callers may create topics (bounded in number)
//! and query a topic's length.
//!
//! - [`queue`] - topic registry and per-topic FIFO queues
//! - [`http`] - axum router and server exposing the registry
//! - [`config`] - TOML configuration
//! - [`logging`] - tracing subscriber setup
//!
//! # Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use topicq::{config::Config, http, queue::Registry};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let registry = Arc::new(Registry::from_config(&config.queue));
//! let state = Arc::new(http::AppState::new(registry));
//! http::serve(&config, state).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod http;
pub mod logging;
pub mod queue;

pub use config::Config;
pub use queue::{Error, Item, Registry, TopicQueue};
