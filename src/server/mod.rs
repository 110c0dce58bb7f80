//! axum page server: router assembly, startup and graceful shutdown.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use std::net::AddrParseError;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::error::RateError;
use config::ServerConfig;
use state::AppState;

/// Startup failures. Request-time failures never surface here.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    Addr(#[from] AddrParseError),

    #[error("Client setup failed: {0}")]
    Client(#[from] RateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Assemble the application router around shared state.
pub fn app(state: Arc<AppState>) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, serve until Ctrl+C, then drain in-flight requests.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let upstream = config.rate_service_url.clone();
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%upstream, "Rate chart listening on http://{addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping…");
}
