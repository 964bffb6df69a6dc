//! topicq command-line entry point.
//
//  $ topicq serve --config topicq.toml
//  $ topicq serve --port 9000 --max-topics 100
//  $ topicq validate --config topicq.toml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use topicq::config::Config;
use topicq::http::{self, AppState};
use topicq::queue::Registry;

#[derive(Debug, Parser)]
#[command(name = "topicq", version, about = "Named-topic in-memory FIFO queue over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Path to config TOML (env TOPICQ_CONFIG, then ./topicq.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Maximum number of topics
        #[arg(long)]
        max_topics: Option<usize>,
    },
    /// Check a configuration file and print the effective settings.
    Validate {
        /// Path to config TOML (env TOPICQ_CONFIG, then ./topicq.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            max_topics,
        } => {
            let mut cfg = Config::discover(config.as_deref())?;
            if let Some(host) = host {
                cfg.server.host = host;
            }
            if let Some(port) = port {
                cfg.server.port = port;
            }
            if let Some(max_topics) = max_topics {
                cfg.queue.max_topics = max_topics;
            }
            serve(cfg).await
        },
        Commands::Validate { config } => validate(config.as_deref()),
    }
}

async fn serve(config: Config) -> Result<()> {
    let validation = config.validate()?;
    topicq::logging::init(&config.logging)?;
    for warning in &validation.warnings {
        warn!("{warning}");
    }

    let registry = Arc::new(Registry::from_config(&config.queue));
    let mut state = AppState::new(registry);
    if config.metrics.enabled {
        state = state.with_metrics(http::metrics::install_recorder()?);
    }

    info!(
        max_topics = config.queue.max_topics,
        metrics = config.metrics.enabled,
        "starting topicq"
    );
    http::serve(&config, Arc::new(state)).await
}

fn validate(path: Option<&std::path::Path>) -> Result<()> {
    let config = Config::discover(path)?;
    let validation = config.validate()?;

    for warning in &validation.warnings {
        println!("Warning: {warning}");
    }

    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("Configuration OK\n\n{rendered}");
    Ok(())
}
