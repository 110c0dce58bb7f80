//! Rate service URL constants.

/// Default rate service base URL.
pub const DEFAULT_RATE_SERVICE_URL: &str = "http://localhost:8080";

/// Path of the BOC AUD/CNY last-10 observations endpoint.
pub const LAST10_PATH: &str = "/api/v1/aud-cny/boc/rates/last10";

/// Default bound on a single outbound fetch.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
