//! Eva: a liveness and status responder.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, builds the Axum router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eva::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use eva::create_router;
use eva::http::start_server;

/// Eva: answers status and liveness probes
#[derive(Parser, Debug)]
#[command(name = "eva", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (Cloud Run injects PORT)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level filter (e.g., "eva=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config first so the log format is known before the subscriber exists
    let config = AppConfig::load_optional(args.config.as_ref())?.with_port(args.port);

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = ?args.config,
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
