//! Configuration types for the topicq server.
//!
//! Configuration is read from a TOML file. Every section and field has a
//! default, so an empty file (or no file at all) yields a working setup:
//!
//! - [`Config`] - Root configuration struct
//! - [`ServerConfig`] - HTTP listener settings
//! - [`QueueConfig`] - Topic registry settings
//! - [`LoggingConfig`] - Log format and default filter
//! - [`MetricsConfig`] - Prometheus endpoint toggle

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::constants;
pub use crate::queue::QueueConfig;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// topicq.toml configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub queue: QueueConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            max_body_bytes: constants::DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid server host: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Metrics configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Serve Prometheus metrics on `/metrics`.
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax
    /// - Fields have invalid types
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Locate and load configuration.
    ///
    /// Lookup order: the explicit `path`, then the `TOPICQ_CONFIG`
    /// environment variable, then `topicq.toml` in the working directory.
    /// Falls back to defaults when none of them is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a located file cannot be loaded.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(constants::CONFIG_ENV_VAR).map(PathBuf::from);
        Self::discover_in(path, env_path.as_deref(), Path::new("."))
    }

    /// Lookup behind [`Config::discover`] with the environment value and
    /// working directory passed in.
    fn discover_in(path: Option<&Path>, env_path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path.or(env_path) {
            return Self::load_from(path);
        }

        let local = dir.join(constants::CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load_from(&local);
        }

        Ok(Self::default())
    }

    /// Validate configuration.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails with one or more errors:
    /// - `queue.max_topics` is 0
    /// - `server.port` is 0
    /// - `server.max_body_bytes` is 0
    /// - `server.host` is not an IP address
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.queue.max_topics == 0 {
            errors.push(
                "queue.max_topics cannot be 0. Set a positive number (default: 25)".to_string(),
            );
        }

        if self.server.port == 0 {
            errors.push(
                "Server port cannot be 0. Use a valid port number (1-65535)\n  \
                 Common ports: 8000 (default), 8080"
                    .to_string(),
            );
        }

        if self.server.max_body_bytes == 0 {
            errors.push("server.max_body_bytes cannot be 0".to_string());
        }

        match self.server.host.parse::<IpAddr>() {
            Ok(ip) if !ip.is_loopback() => warnings.push(format!(
                "Server binds to {ip}, which is reachable from other hosts\n  \
                 The queue API has no authentication"
            )),
            Ok(_) => {},
            Err(_) => errors.push(format!(
                "Server host '{}' is not a valid IP address",
                self.server.host
            )),
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }

        Ok(ValidationResult { warnings })
    }
}
