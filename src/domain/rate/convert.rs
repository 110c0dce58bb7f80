//! Conversion: RawRateRecord → RateRecord (TryFrom + validation).

use super::wire::{RawNumber, RawRateRecord};
use super::{DisplayTime, RateRecord};
use crate::error::ParseError;
use crate::shared::fmt::time;
use crate::shared::Locale;
use chrono::{DateTime, FixedOffset};

impl RawNumber {
    /// Finite `f64` value, or `None` for garbage, NaN and infinities.
    pub fn to_finite(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl DisplayTime {
    pub(crate) fn for_locales(at: &DateTime<FixedOffset>, locales: &[Locale]) -> Self {
        let en = locales.contains(&Locale::En);
        let zh = locales.contains(&Locale::Zh);
        match (en, zh) {
            (true, true) => DisplayTime::Localized {
                en: time::label_en(at),
                zh: time::label_zh(at),
            },
            (false, true) => DisplayTime::Single(time::label_zh(at)),
            _ => DisplayTime::Single(time::label_en(at)),
        }
    }
}

fn coerce_rate(index: usize, field: &'static str, raw: &RawNumber) -> Result<f64, ParseError> {
    raw.to_finite().ok_or_else(|| ParseError::InvalidRate {
        index,
        field,
        value: raw.to_string(),
    })
}

/// `(position in source batch, record, requested locales)`
impl<'a> TryFrom<(usize, RawRateRecord, &'a [Locale])> for RateRecord {
    type Error = ParseError;

    fn try_from(
        (index, source, locales): (usize, RawRateRecord, &'a [Locale]),
    ) -> Result<Self, Self::Error> {
        let buying_rate = coerce_rate(index, "buying_rate", &source.buying_rate)?;
        let selling_rate = coerce_rate(index, "selling_rate", &source.selling_rate)?;
        let observed_at =
            time::parse_timestamp(&source.timestamp).ok_or_else(|| ParseError::InvalidTimestamp {
                index,
                value: source.timestamp.clone(),
            })?;

        Ok(Self {
            buying_rate,
            selling_rate,
            display_time: DisplayTime::for_locales(&observed_at, locales),
            observed_at,
            timestamp: source.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(buy: RawNumber, sell: RawNumber, ts: &str) -> RawRateRecord {
        RawRateRecord {
            buying_rate: buy,
            selling_rate: sell,
            timestamp: ts.to_string(),
        }
    }

    #[test]
    fn test_to_finite() {
        assert_eq!(RawNumber::from(" 4.62 ").to_finite(), Some(4.62));
        assert_eq!(RawNumber::from(462.35).to_finite(), Some(462.35));
        assert_eq!(RawNumber::from("1e2").to_finite(), Some(100.0));
        assert_eq!(RawNumber::from("abc").to_finite(), None);
        assert_eq!(RawNumber::from("").to_finite(), None);
        assert_eq!(RawNumber::from("NaN").to_finite(), None);
        assert_eq!(RawNumber::from("inf").to_finite(), None);
    }

    #[test]
    fn test_sample_record_with_both_locales() {
        let raw = sample("4.62".into(), "4.88".into(), "2024-03-01T09:05:00Z");
        let record = RateRecord::try_from((0, raw, &Locale::ALL[..])).unwrap();
        assert_eq!(record.buying_rate, 4.62);
        assert_eq!(record.selling_rate, 4.88);
        assert_eq!(record.timestamp, "2024-03-01T09:05:00Z");
        assert_eq!(
            record.display_time,
            DisplayTime::Localized {
                en: "Mar-01 09:05".into(),
                zh: "3月1日 09:05".into(),
            }
        );
    }

    #[test]
    fn test_buying_rate_checked_first() {
        let raw = sample("x".into(), "y".into(), "2024-03-01T09:05:00Z");
        let err = RateRecord::try_from((4, raw, &[Locale::En][..])).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRate {
                index: 4,
                field: "buying_rate",
                value: "x".into(),
            }
        );
    }

    #[test]
    fn test_bad_timestamp() {
        let raw = sample(4.6.into(), 4.8.into(), "not-a-time");
        let err = RateRecord::try_from((1, raw, &[Locale::En][..])).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidTimestamp {
                index: 1,
                value: "not-a-time".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_locales_collapse() {
        let raw = sample("1".into(), "2".into(), "2024-03-01T09:05:00Z");
        let record =
            RateRecord::try_from((0, raw, &[Locale::Zh, Locale::Zh][..])).unwrap();
        assert_eq!(record.display_time, DisplayTime::Single("3月1日 09:05".into()));
    }
}
