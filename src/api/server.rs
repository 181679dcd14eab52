use std::sync::Arc;

use tracing::info;

use super::handler::router;
use crate::ai::registry::build_chain;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// Builds the chain once and serves HTTP until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: &AppConfig) -> Result<(), SummarizerError> {
    let chain = Arc::new(build_chain(config));
    let app = router(chain);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SummarizerError::ServerError(format!("Failed to bind to {addr}: {e}")))?;

    info!("AI Summarizer API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SummarizerError::ServerError(format!("HTTP server error: {e}")))?;

    info!("AI Summarizer API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
