//! Default values shared by configuration and the CLI.

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default upper bound on concurrently existing topics.
pub const DEFAULT_MAX_TOPICS: usize = 25;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "topicq.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TOPICQ_CONFIG";
