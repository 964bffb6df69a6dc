//! HTTP API for the topic queue.
//!
//! Routes:
//! - `PUT /topic` - create a topic
//! - `POST /topic` - send a message to a topic
//! - `GET /topic` - take the oldest message of a topic
//! - `GET /length` - number of pending messages in a topic
//! - `GET /topics` - list topics
//! - `GET /health` - liveness check
//! - `GET /metrics` - Prometheus metrics (when enabled)
//!
//! GET routes read the topic from `?topic_name=` or a JSON body
//! `{"topic_name": ...}`.

mod error;
mod extract;
mod handlers;
pub mod metrics;
pub mod types;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::constants;
use crate::queue::Registry;

pub use error::AppError;

/// State shared by all handlers.
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Prometheus handle, present when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            metrics: None,
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Build the API router with the default body limit.
pub fn router(state: SharedState) -> Router {
    router_with_limit(state, constants::DEFAULT_MAX_BODY_BYTES)
}

/// Build the API router, rejecting bodies larger than `max_body_bytes`.
pub fn router_with_limit(state: SharedState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/topic",
            put(handlers::create_topic)
                .post(handlers::send_message)
                .get(handlers::get_message),
        )
        .route("/length", get(handlers::topic_length))
        .route("/topics", get(handlers::list_topics))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::prometheus_metrics))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the
/// server fails while running.
pub async fn serve(config: &Config, state: SharedState) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let app = router_with_limit(state, config.server.max_body_bytes);
    serve_listener(listener, app, shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve_listener<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "topicq listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    info!("topicq stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
