use std::sync::Arc;

use crate::client::RateClient;
use crate::error::RateError;
use crate::server::config::ServerConfig;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
///
/// Read-only after startup; every request fetches and owns its own rate batch.
pub struct AppState {
    pub config: ServerConfig,
    pub client: RateClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, RateError> {
        let client = RateClient::builder()
            .base_url(&config.rate_service_url)
            .timeout(config.fetch_timeout())
            .build()?;
        Ok(Arc::new(Self { config, client }))
    }
}
