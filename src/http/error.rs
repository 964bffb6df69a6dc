//! HTTP error type translating failures into the failure envelope.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::types::{ErrorResponse, Status};
use crate::queue;

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Failure reported by the queue engine.
    #[error(transparent)]
    Queue(#[from] queue::Error),

    /// Request could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Queue(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable failure kind.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Queue(e) => e.kind(),
            Self::BadRequest(_) => "bad_request",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::BadRequest(ref reason) = self {
            warn!(%reason, "rejected malformed request");
        }

        let body = ErrorResponse {
            status: Status::Fail,
            kind: self.kind().to_string(),
            err: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("Invalid JSON body: {err}"))
    }
}
