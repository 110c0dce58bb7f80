//! High-level client — `RateClient` with sub-client accessors.
//!
//! Holds no per-request state: each call owns the data it fetches, so a
//! single client can be shared across concurrent page renders.

use crate::domain::rate::client::Rates;
use crate::error::RateError;
use crate::http::RateHttp;
use crate::network::{DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_RATE_SERVICE_URL};

use std::time::Duration;

pub use crate::domain::rate::client::Rates as RatesClient;

/// The primary entry point for fetching chart data.
#[derive(Clone)]
pub struct RateClient {
    pub(crate) http: RateHttp,
}

impl RateClient {
    pub fn builder() -> RateClientBuilder {
        RateClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }

    pub fn http(&self) -> &RateHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RateClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for RateClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RATE_SERVICE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl RateClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Upper bound on one fetch, connect through body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RateClient, RateError> {
        Ok(RateClient {
            http: RateHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
