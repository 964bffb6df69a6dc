//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::queue::Item;

/// Outcome marker carried by response envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Success,
    Fail,
}

/// Body naming a topic (create, get, length).
///
/// Missing fields decode as empty strings.
#[derive(Debug, Deserialize, Serialize)]
pub struct TopicNameRequest {
    #[serde(default)]
    pub topic_name: String,
}

/// Query string alternative to [`TopicNameRequest`] for GET routes.
#[derive(Debug, Deserialize)]
pub struct TopicNameQuery {
    pub topic_name: Option<String>,
}

/// Body of a send request.
#[derive(Debug, Deserialize, Serialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub msg: String,
    /// Accepted for compatibility; the queue assigns ids.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub topic: String,
}

/// Envelope returned by create and send.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    pub msg: String,
    pub err: String,
}

impl StatusResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            msg: msg.into(),
            err: String::new(),
        }
    }
}

/// Response to a get request. `msg` is `None` when the topic is empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetMessageResponse {
    pub topic: String,
    pub msg: Option<Item>,
    pub err: String,
}

/// Response to a length request.
#[derive(Debug, Serialize, Deserialize)]
pub struct LengthResponse {
    pub status: Status,
    pub length: usize,
    pub err: String,
}

/// One entry of the topic listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicInfo {
    pub name: String,
    pub length: usize,
}

/// Response to a topic listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTopicsResponse {
    pub status: Status,
    pub topics: Vec<TopicInfo>,
    pub max_topics: usize,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub topics: usize,
    pub max_topics: usize,
    pub timestamp: String,
}

/// Failure envelope shared by every route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    /// Machine-readable failure kind.
    pub kind: String,
    /// Human-readable explanation.
    pub err: String,
}
