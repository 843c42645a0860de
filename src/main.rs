//! Vitals: an HTTP health-check endpoint that reports EC2 instance metadata.
//!
//! This is the application entry point. It parses command-line flags,
//! initializes tracing, detects the region when none was given, sets up the
//! Axum router, and serves until the process is terminated.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals::cli::Args;
use vitals::config::{ServerConfig, DEFAULT_LOG_FILTER};
use vitals::metadata::ImdsClient;
use vitals::routes::create_router;
use vitals::state::AppState;
use vitals::templates::init_templates;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the immutable runtime configuration
    let metadata = ImdsClient::from_env();
    let config = ServerConfig::from_args(&args, &metadata).await;
    tracing::info!(
        bind = %config.bind_address,
        port = config.port,
        region = %config.region,
        "Loaded configuration"
    );

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(config.clone(), tera, metadata);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGTERM or Ctrl+C arrives.
///
/// Axum stops accepting new connections and lets in-flight requests finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
