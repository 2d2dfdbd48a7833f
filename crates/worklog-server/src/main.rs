//! Worklog server - HTTP server for the work-item feed dashboard.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use worklog_server::{config::Config, logging, refresher, state::AppState};

use logging::{LogConfig, LogFormat};

/// Worklog server - feed ingestion and view service.
#[derive(Parser, Debug)]
#[command(name = "worklog-server")]
#[command(about = "HTTP server for work-item feed ingestion and views")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Override feed URL from config
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Keep persisted history across restarts (overrides reset_on_start)
    #[arg(long)]
    keep_history: bool,

    /// Enable verbose logging (INFO level for most targets)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "feed=debug").
    /// Can be specified multiple times. Targets are prefixed with "worklog::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(feed_url) = cli.feed_url {
        config.feed_url = feed_url;
    }
    if cli.keep_history {
        config.reset_on_start = false;
    }

    tracing::info!(
        target: "worklog::startup",
        "Loaded configuration (port: {}, feed: {}, reset_on_start: {})",
        config.port,
        config.feed_url,
        config.reset_on_start
    );

    let state = Arc::new(AppState::new(config.clone())?);
    tracing::info!(target: "worklog::startup", "Initialized application state");

    // Startup fetch plus the recurring 30s cycle, behind one stop handle
    let refresher = refresher::spawn(state.clone());
    tracing::info!(target: "worklog::startup", "Started feed refresher");

    let app = worklog_server::router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(target: "worklog::startup", "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresher.stop().await;
    tracing::info!(target: "worklog::startup", "Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
