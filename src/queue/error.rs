//! Error types for topic and queue operations.
//!
//! Every variant is recoverable: callers map them onto a failure response
//! and carry on serving.

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Queue engine errors with structured context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No topic is registered under the requested name.
    #[error("topic '{name}' does not exist")]
    TopicNotFound { name: String },

    /// A topic with this name is already registered.
    #[error("topic '{name}' already exists")]
    TopicAlreadyExists { name: String },

    /// The registry already holds the maximum number of topics.
    #[error("maximum number of topics reached ({max})")]
    CapacityExceeded { max: usize },

    /// The topic exists but holds no pending messages.
    #[error("topic '{name}' has no pending messages")]
    QueueEmpty { name: String },
}

impl Error {
    /// Create a topic not found error.
    pub fn topic_not_found(name: impl Into<String>) -> Self {
        Self::TopicNotFound { name: name.into() }
    }

    /// Create a topic already exists error.
    pub fn topic_already_exists(name: impl Into<String>) -> Self {
        Self::TopicAlreadyExists { name: name.into() }
    }

    /// Create a queue empty error.
    pub fn queue_empty(name: impl Into<String>) -> Self {
        Self::QueueEmpty { name: name.into() }
    }

    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TopicNotFound { .. } => "topic_not_found",
            Self::TopicAlreadyExists { .. } => "topic_already_exists",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::QueueEmpty { .. } => "queue_empty",
        }
    }

    /// Get the appropriate HTTP status code for this error.
    ///
    /// An empty queue is an expected outcome, so it maps to 200.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::TopicNotFound { .. } => 404,
            Self::TopicAlreadyExists { .. } | Self::CapacityExceeded { .. } => 409,
            Self::QueueEmpty { .. } => 200,
        }
    }
}
