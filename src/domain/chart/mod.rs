//! Chart domain — axis range and per-locale projection of a rate batch.

use crate::domain::rate::RateRecord;
use crate::error::RateError;
use crate::shared::Locale;
use serde::{Deserialize, Serialize};

/// Lower padding factor applied to the smallest observed rate.
pub const LOWER_PADDING: f64 = 0.998;
/// Upper padding factor applied to the largest observed rate.
pub const UPPER_PADDING: f64 = 1.002;

/// Integer value-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: i64,
    pub max: i64,
}

impl AxisDomain {
    pub fn span(&self) -> i64 {
        self.max - self.min
    }
}

/// Pool buying and selling rates, pad by ±0.2% and round outward.
pub fn compute_domain(records: &[RateRecord]) -> Result<AxisDomain, RateError> {
    let mut rates = records
        .iter()
        .flat_map(|r| [r.buying_rate, r.selling_rate]);

    let first = rates.next().ok_or(RateError::EmptyDataset)?;
    let (lowest, highest) = rates.fold((first, first), |(lo, hi), rate| {
        (lo.min(rate), hi.max(rate))
    });

    Ok(AxisDomain {
        min: (lowest * LOWER_PADDING).floor() as i64,
        max: (highest * UPPER_PADDING).ceil() as i64,
    })
}

/// One x-axis position, labelled for a single locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub buying_rate: f64,
    pub selling_rate: f64,
}

/// Everything the page needs for one render: ordered records plus their axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub records: Vec<RateRecord>,
    pub axis: AxisDomain,
}

impl ChartData {
    /// Fails with `EmptyDataset` when there is nothing to draw.
    pub fn from_records(records: Vec<RateRecord>) -> Result<Self, RateError> {
        let axis = compute_domain(&records)?;
        Ok(Self { records, axis })
    }

    /// Project labels for `locale`. Switching locale re-projects, never re-fetches.
    pub fn points(&self, locale: Locale) -> Vec<ChartPoint> {
        self.records
            .iter()
            .map(|r| ChartPoint {
                label: r.display_time.get(locale).to_string(),
                buying_rate: r.buying_rate,
                selling_rate: r.selling_rate,
            })
            .collect()
    }
}
