//! DevLink - profile service HTTP server
//!
//! Main entry point: loads configuration, builds the application context,
//! and serves the router until ctrl-c.

use std::sync::Arc;

use devlink_domain::{Config, DevLinkError, Result};
use devlink_lib::{routes, AppContext};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging FIRST so config loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from a .env file when one exists
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => info!(error = %err, "no .env file loaded"),
    }

    let config = match devlink_infra::config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "configuration loading failed; falling back to defaults");
            Config::default()
        }
    };

    let host = config.server.host.clone();
    let port = config.server.port;

    let ctx = Arc::new(AppContext::new(config)?);
    let app = routes::router(Arc::clone(&ctx));

    let listener = TcpListener::bind((host.as_str(), port)).await.map_err(|err| {
        DevLinkError::Internal(format!("failed to bind {}:{}: {}", host, port, err))
    })?;
    info!(host = %host, port, "devlink api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| DevLinkError::Internal(format!("server error: {}", err)))?;

    info!("devlink api stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
