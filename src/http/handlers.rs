//! Topic and message handlers.
//!
//! Each handler maps one request onto one registry call and wraps the
//! outcome in the response envelope.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::debug;

use super::extract::TopicSelector;
use super::types::{
    GetMessageResponse, HealthResponse, LengthResponse, ListTopicsResponse, SendMessageRequest,
    Status, StatusResponse, TopicInfo, TopicNameRequest,
};
use super::{AppError, AppState, SharedState, metrics};
use crate::queue::Error;

/// PUT /topic - Create a topic.
pub(crate) async fn create_topic(
    State(state): State<SharedState>,
    req: Result<Json<TopicNameRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    track("create", create(&state, req))
}

fn create(
    state: &AppState,
    req: Result<Json<TopicNameRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(req) = req?;
    state.registry.create_topic(&req.topic_name)?;

    metrics::record_queue_operation("create", &req.topic_name);
    metrics::set_queue_length(&req.topic_name, 0);
    metrics::set_topic_count(state.registry.topic_count());

    Ok(Json(StatusResponse::success(format!(
        "Topic {} Added.",
        req.topic_name
    ))))
}

/// POST /topic - Append a message to a topic.
pub(crate) async fn send_message(
    State(state): State<SharedState>,
    req: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    track("send", send(&state, req))
}

fn send(
    state: &AppState,
    req: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(req) = req?;
    if req.id != 0 {
        debug!(topic = %req.topic, client_id = req.id, "ignoring client-supplied message id");
    }

    let queue = state
        .registry
        .lookup(&req.topic)
        .ok_or_else(|| Error::topic_not_found(&req.topic))?;
    let item = queue.insert(req.msg);

    metrics::record_queue_operation("send", queue.name());
    metrics::set_queue_length(queue.name(), queue.length());

    Ok(Json(StatusResponse::success(format!(
        "Received Msg {} // ID: {} // Topic: {}",
        item.payload, item.id, item.topic
    ))))
}

/// GET /topic - Remove and return the oldest message of a topic.
pub(crate) async fn get_message(
    State(state): State<SharedState>,
    topic: Result<TopicSelector, AppError>,
) -> Result<Json<GetMessageResponse>, AppError> {
    track("get", topic.and_then(|TopicSelector(topic)| take(&state, topic)))
}

fn take(state: &AppState, topic: String) -> Result<Json<GetMessageResponse>, AppError> {
    let queue = state
        .registry
        .lookup(&topic)
        .ok_or_else(|| Error::topic_not_found(&topic))?;

    let response = match queue.get() {
        Some(item) => GetMessageResponse {
            topic: item.topic.clone(),
            msg: Some(item),
            err: String::new(),
        },
        None => GetMessageResponse {
            err: Error::queue_empty(&topic).to_string(),
            topic,
            msg: None,
        },
    };

    metrics::record_queue_operation("get", queue.name());
    metrics::set_queue_length(queue.name(), queue.length());

    Ok(Json(response))
}

/// GET /length - Number of pending messages in a topic.
pub(crate) async fn topic_length(
    State(state): State<SharedState>,
    topic: Result<TopicSelector, AppError>,
) -> Result<Json<LengthResponse>, AppError> {
    track("length", topic.and_then(|TopicSelector(topic)| length(&state, &topic)))
}

fn length(state: &AppState, topic: &str) -> Result<Json<LengthResponse>, AppError> {
    let length = state.registry.length(topic)?;

    metrics::record_queue_operation("length", topic);
    metrics::set_queue_length(topic, length);

    Ok(Json(LengthResponse {
        status: Status::Success,
        length,
        err: String::new(),
    }))
}

/// Count a failed request by operation and kind, never by topic.
fn track<T>(operation: &'static str, result: Result<T, AppError>) -> Result<T, AppError> {
    if let Err(ref e) = result {
        metrics::record_queue_failure(operation, e.kind());
    }
    result
}

/// GET /topics - List all topics with their lengths.
pub(crate) async fn list_topics(State(state): State<SharedState>) -> Json<ListTopicsResponse> {
    metrics::record_queue_operation("list", "all");

    let topics = state
        .registry
        .topic_names()
        .into_iter()
        .filter_map(|name| {
            let length = state.registry.lookup(&name)?.length();
            Some(TopicInfo { name, length })
        })
        .collect();

    Json(ListTopicsResponse {
        status: Status::Success,
        topics,
        max_topics: state.registry.max_topics(),
    })
}

/// GET /health - Liveness check.
pub(crate) async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        topics: state.registry.topic_count(),
        max_topics: state.registry.max_topics(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /metrics - Prometheus exposition.
pub(crate) async fn prometheus_metrics(State(state): State<SharedState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics are disabled").into_response(),
    }
}
