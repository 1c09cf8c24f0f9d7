//! Jira Dashboard Backend
//!
//! Run with: cargo run -- serve
//!
//! Configuration is read from `--config`, then `~/.config/jira-dashboard/config.toml`
//! or `./config.toml`, with `JIRA_*` environment variables layered on top.
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use jira_dashboard::api::{serve, AppState};
use jira_dashboard::config::{generate_default_config, Config, LoggingConfig};
use jira_dashboard::priorities::PriorityRepository;
use jira_dashboard::tracker::JiraUpstream;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "jira-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Backend proxy and priority store for the Jira issue dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the bind port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a default config file to stdout
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Serve { config, host, port } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_tracing(&config.logging);
            run(config).await
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("jira_dashboard={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Jira dashboard backend v{}", env!("CARGO_PKG_VERSION"));

    let tracker_configured = config.tracker.is_configured();
    if tracker_configured {
        tracing::info!("Tracker: {}", config.tracker.base_url);
    } else {
        tracing::warn!("Tracker credentials missing (set JIRA_BASE_URL, JIRA_EMAIL, JIRA_API_TOKEN); proxy routes will return 503");
    }

    let tracker = Arc::new(
        JiraUpstream::new(config.tracker.clone()).context("Failed to build tracker client")?,
    );

    tracing::info!("Data directory: {}", config.priorities.data_dir);
    let priorities = Arc::new(
        PriorityRepository::open(&config.priorities.data_dir)
            .await
            .context("Failed to open priority storage")?,
    );

    let state = AppState::new(tracker, priorities, config.server.clone(), tracker_configured);
    serve(state).await?;

    tracing::info!("Jira dashboard backend stopped");
    Ok(())
}
