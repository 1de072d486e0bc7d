//! Serving loop for the MCP handler.
//!
//! `serve` runs a `ServerHandler` over the selected transport until the peer
//! disconnects or the process receives SIGTERM/SIGINT. A failure to bind the
//! HTTP port is the only fault surfaced to the caller; everything else is
//! handled per-call by the handler itself.

use crate::transport::Transport;
use rmcp::{ServerHandler, ServiceExt};
use thiserror::Error;

/// Faults that can stop the serving loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The HTTP port could not be bound
    #[error("Failed to bind port {port}: {message}")]
    Bind {
        /// Port that could not be bound
        port: u16,
        /// Underlying error message
        message: String,
    },

    /// The transport failed while serving
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Run `handler` over `transport` until shutdown.
pub async fn serve<H>(handler: H, transport: Transport) -> Result<(), ServerError>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    tracing::info!(%transport, "Starting MCP server");
    match transport {
        Transport::Stdio => serve_stdio(handler).await,
        Transport::Http { port } => serve_http(handler, port).await,
    }
}

async fn serve_stdio<H>(handler: H) -> Result<(), ServerError>
where
    H: ServerHandler + Send + Sync + 'static,
{
    let service = handler
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    tokio::select! {
        result = service.waiting() => {
            result.map_err(|e| ServerError::Transport(e.to_string()))?;
        }
        _ = shutdown_signal() => {}
    }
    tracing::info!("Server stopped");
    Ok(())
}

async fn serve_http<H>(handler: H, port: u16) -> Result<(), ServerError>
where
    H: ServerHandler + Clone + Send + Sync + 'static,
{
    use rmcp::transport::streamable_http_server::{
        StreamableHttpService, session::local::LocalSessionManager,
    };

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| ServerError::Bind {
            port,
            message: e.to_string(),
        })?;
    tracing::info!(port, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives SIGTERM or SIGINT.
async fn shutdown_signal() {
    let interrupt = async {
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
        _ = interrupt => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
