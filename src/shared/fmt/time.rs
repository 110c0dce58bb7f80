//! Observation-time parsing and locale-specific labels.
//!
//! Labels use the calendar fields exactly as written in the source timestamp.
//! No timezone conversion happens: `2024-03-01T09:05:00+08:00` is labelled
//! `09:05`, not the UTC or server-local equivalent.

use crate::shared::Locale;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};

/// Offset-less layouts accepted after RFC 3339 fails. Treated as UTC for ordering.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a source timestamp, keeping its written offset.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// `Mar-01 09:05`
pub fn label_en(at: &DateTime<FixedOffset>) -> String {
    at.format("%b-%d %H:%M").to_string()
}

/// `3月1日 09:05`
pub fn label_zh(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{}月{}日 {:02}:{:02}",
        at.month(),
        at.day(),
        at.hour(),
        at.minute()
    )
}

pub fn label(at: &DateTime<FixedOffset>, locale: Locale) -> String {
    match locale {
        Locale::En => label_en(at),
        Locale::Zh => label_zh(at),
    }
}
