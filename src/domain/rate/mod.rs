//! Rate domain — BOC AUD/CNY observations and the transform into chart-ready records.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::ParseError;
use crate::shared::Locale;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Observation time label, in one locale or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayTime {
    Single(String),
    Localized { en: String, zh: String },
}

impl DisplayTime {
    /// Label for `locale`. A single-locale value answers with its only label.
    pub fn get(&self, locale: Locale) -> &str {
        match self {
            DisplayTime::Single(label) => label,
            DisplayTime::Localized { en, zh } => match locale {
                Locale::En => en,
                Locale::Zh => zh,
            },
        }
    }
}

/// A validated rate observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub buying_rate: f64,
    pub selling_rate: f64,
    /// Source timestamp text, as received.
    pub timestamp: String,
    pub observed_at: DateTime<FixedOffset>,
    pub display_time: DisplayTime,
}

/// Coerce, label and order a raw batch.
///
/// Output is sorted oldest → newest by instant (stable for equal instants),
/// which for the newest-first upstream is a plain reversal. An empty
/// `locales` slice means English only.
///
/// Labels keep the wall-clock fields as written while ordering uses the
/// instant, so a batch mixing UTC offsets can show labels that read out of
/// order (`+08:00` 09:05 sorts before `Z` 02:00).
pub fn transform(
    raw: Vec<wire::RawRateRecord>,
    locales: &[Locale],
) -> Result<Vec<RateRecord>, ParseError> {
    let mut records = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| RateRecord::try_from((index, record, locales)))
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by_key(|r| r.observed_at);

    tracing::debug!(count = records.len(), ?locales, "Transformed rate batch");
    Ok(records)
}
