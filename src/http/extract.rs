//! Extractors for topic-addressed GET routes.

use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
};

use super::error::AppError;
use super::types::{TopicNameQuery, TopicNameRequest};

/// Topic name taken from `?topic_name=` or, failing that, from a JSON body.
///
/// GET bodies are accepted without a `Content-Type` header since many
/// clients omit it on GET.
#[derive(Debug)]
pub struct TopicSelector(pub String);

impl<S> FromRequest<S> for TopicSelector
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.uri().query().is_some() {
            let Query(query) = Query::<TopicNameQuery>::try_from_uri(req.uri())?;
            if let Some(name) = query.topic_name {
                return Ok(Self(name));
            }
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if body.is_empty() {
            return Err(AppError::BadRequest(
                "Missing topic_name (query parameter or JSON body)".to_string(),
            ));
        }

        let request: TopicNameRequest = serde_json::from_slice(&body)?;
        Ok(Self(request.topic_name))
    }
}
