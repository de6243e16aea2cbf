//! HTTP server startup logic.

use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;
use crate::error::ServerError;

use super::shutdown;

/// Start the HTTP server based on configuration.
///
/// Shuts down gracefully on SIGTERM or Ctrl+C. This function blocks until
/// the server stops.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let handle = Handle::new();
    let grace = Duration::from_secs(config.http.shutdown_grace_seconds);

    shutdown::setup_shutdown_handler(handle.clone(), grace);

    serve(app, config, handle).await
}

/// Serve `app` until `handle` is told to shut down.
///
/// The bound address is reported through [`Handle::listening`], which makes
/// port `0` usable.
pub async fn serve(app: Router, config: &AppConfig, handle: Handle) -> Result<(), ServerError> {
    let addr = config
        .http
        .socket_addr()
        .map_err(|source| ServerError::Address {
            host: config.http.host.clone(),
            source,
        })?;

    tracing::info!(
        %addr,
        grace_seconds = config.http.shutdown_grace_seconds,
        "Starting HTTP server"
    );

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
