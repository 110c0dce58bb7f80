//! Rates sub-client — fetch, validate, transform.

use super::wire::{self, RawRateRecord};
use super::{transform, RateRecord};
use crate::client::RateClient;
use crate::domain::chart::ChartData;
use crate::error::RateError;
use crate::shared::Locale;

/// Sub-client for the last-10 rates endpoint.
pub struct Rates<'a> {
    pub(crate) client: &'a RateClient,
}

impl<'a> Rates<'a> {
    /// Fetch and schema-check the upstream batch (newest first, untransformed).
    pub async fn raw_last10(&self) -> Result<Vec<RawRateRecord>, RateError> {
        let body = self.client.http.get_last10().await?;
        Ok(wire::parse_batch(body)?)
    }

    /// Chronological, labelled records for `locales`.
    pub async fn last10(&self, locales: &[Locale]) -> Result<Vec<RateRecord>, RateError> {
        let raw = self.raw_last10().await?;
        Ok(transform(raw, locales)?)
    }

    /// The whole page-load pipeline: records plus their axis domain.
    pub async fn chart(&self, locales: &[Locale]) -> Result<ChartData, RateError> {
        let records = self.last10(locales).await?;
        let chart = ChartData::from_records(records)?;
        tracing::debug!(
            points = chart.records.len(),
            axis_min = chart.axis.min,
            axis_max = chart.axis.max,
            "Built rate chart"
        );
        Ok(chart)
    }
}
