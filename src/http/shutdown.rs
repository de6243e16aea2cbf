//! Graceful shutdown and signal handling.
//!
//! Cloud Run sends SIGTERM before stopping an instance; Ctrl+C covers local runs.

use std::future::Future;
use std::time::Duration;

use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait up to `grace` for existing connections to complete
/// 3. Shutdown
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(drain_on(shutdown_signal(), handle, grace));
}

/// Wait for `signal`, then start a graceful shutdown on `handle`.
pub(crate) async fn drain_on<F>(signal: F, handle: Handle, grace: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;

    handle.graceful_shutdown(Some(grace));
    tracing::info!(
        grace_seconds = grace.as_secs(),
        "Graceful shutdown initiated, waiting for connections to close"
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
