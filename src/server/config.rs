use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use crate::network::{DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_RATE_SERVICE_URL};
use crate::shared::Locale;

/// Server configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Base URL of the rate service; the last-10 path is appended.
    pub rate_service_url: String,
    pub fetch_timeout_ms: u64,
    /// Locale shown when the request has no usable `lang` parameter.
    pub default_locale: Locale,
}

fn lookup_str(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn lookup_u16(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u16) -> u16 {
    lookup(name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn lookup_u64(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    lookup(name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn lookup_locale(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Locale {
    lookup(name)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any key → value source. Missing or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind: lookup_str(&lookup, "RATE_CHART_BIND", "127.0.0.1"),
            port: lookup_u16(&lookup, "RATE_CHART_PORT", 3000),
            rate_service_url: lookup_str(&lookup, "RATE_SERVICE_URL", DEFAULT_RATE_SERVICE_URL),
            fetch_timeout_ms: lookup_u64(&lookup, "RATE_FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS)
                .max(1),
            default_locale: lookup_locale(&lookup, "RATE_CHART_DEFAULT_LANG"),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.rate_service_url, DEFAULT_RATE_SERVICE_URL);
        assert_eq!(cfg.fetch_timeout(), Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS));
        assert_eq!(cfg.default_locale, Locale::En);
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("RATE_CHART_BIND", "0.0.0.0"),
            ("RATE_CHART_PORT", " 8088 "),
            ("RATE_SERVICE_URL", "http://rates.internal:9000"),
            ("RATE_FETCH_TIMEOUT_MS", "2500"),
            ("RATE_CHART_DEFAULT_LANG", "zh-CN"),
        ]);
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:8088");
        assert_eq!(cfg.rate_service_url, "http://rates.internal:9000");
        assert_eq!(cfg.fetch_timeout(), Duration::from_millis(2500));
        assert_eq!(cfg.default_locale, Locale::Zh);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = config(&[
            ("RATE_CHART_PORT", "http"),
            ("RATE_SERVICE_URL", "   "),
            ("RATE_FETCH_TIMEOUT_MS", "0"),
            ("RATE_CHART_DEFAULT_LANG", "fr"),
        ]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.rate_service_url, DEFAULT_RATE_SERVICE_URL);
        assert_eq!(cfg.fetch_timeout_ms, 1);
        assert_eq!(cfg.default_locale, Locale::En);
    }

    #[test]
    fn test_invalid_bind_is_reported() {
        let cfg = config(&[("RATE_CHART_BIND", "not an address")]);
        assert!(cfg.socket_addr().is_err());
    }
}
