//! Shared helpers for integration tests: a topicq server on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use topicq::http::{self, AppState};
use topicq::queue::Registry;

/// A running server that shuts down when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub registry: Arc<Registry>,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<anyhow::Result<()>>>,
}

impl TestServer {
    /// Start a server allowing `max_topics` topics.
    pub async fn start(max_topics: usize) -> anyhow::Result<Self> {
        let registry = Arc::new(Registry::new(max_topics));
        let state = Arc::new(AppState::new(Arc::clone(&registry)));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(http::serve_listener(listener, http::router(state), async {
            let _ = rx.await;
        }));

        Ok(Self {
            addr,
            registry,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
            handle: Some(handle),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the server task.
    pub async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
