//! Error types for the fetch → validate → transform → domain pipeline.

use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum RateError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Empty dataset: no rate records to chart")]
    EmptyDataset,
}

impl RateError {
    /// Stable short code, safe to expose to end users.
    pub fn kind(&self) -> &'static str {
        match self {
            RateError::Fetch(_) => "fetch_error",
            RateError::Parse(_) => "parse_error",
            RateError::EmptyDataset => "empty_dataset",
        }
    }
}

/// Outbound HTTP errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("Response body is not JSON: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Raw payload validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected payload shape: {0}")]
    Schema(String),

    #[error("Record {index}: {field} is not a finite number: {value:?}")]
    InvalidRate {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Record {index}: unrecognized timestamp {value:?}")]
    InvalidTimestamp { index: usize, value: String },
}
