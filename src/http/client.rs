//! Low-level HTTP client — `RateHttp`.
//!
//! One method per upstream endpoint. Returns the raw JSON body; schema
//! validation and conversion happen in `domain::rate`.

use crate::error::FetchError;
use crate::network::LAST10_PATH;

use reqwest::Client;
use std::time::Duration;

/// Upstream error bodies are kept for logging, cut to this many bytes.
pub const MAX_ERROR_BODY_BYTES: usize = 512;

/// Low-level HTTP client for the rate service.
///
/// Every request is a single attempt bounded by `timeout`. There are no retries.
#[derive(Clone)]
pub struct RateHttp {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl RateHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── Rates ────────────────────────────────────────────────────────────

    /// `GET /api/v1/aud-cny/boc/rates/last10`
    pub async fn get_last10(&self) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}{}", self.base_url, LAST10_PATH);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        tracing::debug!(timeout_ms = self.timeout_ms(), "GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = resp.status();

        if !status.is_success() {
            let body = truncate_body(resp.text().await.unwrap_or_default());
            tracing::warn!(status = status.as_u16(), "Upstream rejected {}", url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| self.classify(e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                after_ms: self.timeout_ms(),
            }
        } else {
            FetchError::Transport(err)
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Cut `body` to at most `MAX_ERROR_BODY_BYTES`, on a char boundary.
fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push('…');
    }
    body
}
