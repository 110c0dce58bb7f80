//! # BOC rate chart
//!
//! A server-rendered page charting the ten most recent Bank of China AUD/CNY
//! buying and selling rates, in English or Chinese.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Locale, display formatting, rate and chart domain types (always available)
//! 2. **HTTP** — `RateHttp`, a single-attempt fetcher with a bounded timeout
//! 3. **High-Level Client** — `RateClient` running fetch → validate → transform → axis
//! 4. **Render** — HTML page, inline SVG chart, bilingual strings, error panel
//! 5. **Server** — axum routes, environment config, graceful shutdown
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use boc_rate_chart::prelude::*;
//!
//! let client = RateClient::builder()
//!     .base_url("http://rates.internal:8080")
//!     .build()?;
//!
//! let chart = client.rates().chart(&Locale::ALL).await;
//! let html = render_page(&chart, Locale::Zh);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Locale and display formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): wire types, conversions, chart data.
pub mod domain;

/// Pipeline error types.
pub mod error;

/// Rate service URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Outbound HTTP fetcher.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `RateClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Render ──────────────────────────────────────────────────────────

/// Page, chart and translated strings.
pub mod render;

// ── Layer 5: Server ──────────────────────────────────────────────────────────

/// axum page server.
#[cfg(feature = "server")]
pub mod server;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::Locale;

    // Domain types
    pub use crate::domain::chart::{compute_domain, AxisDomain, ChartData, ChartPoint};
    pub use crate::domain::rate::wire::{RawNumber, RawRateRecord};
    pub use crate::domain::rate::{transform, DisplayTime, RateRecord};

    // Errors
    pub use crate::error::{FetchError, ParseError, RateError};

    // Rendering
    pub use crate::render::i18n::Strings;
    pub use crate::render::render_page;

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::client::{RateClient, RateClientBuilder, RatesClient};
}
