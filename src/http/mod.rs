//! HTTP client layer — `RateHttp`, a bounded single-shot fetcher.

pub mod client;

pub use client::{RateHttp, MAX_ERROR_BODY_BYTES};
