//! 30-day history lookups against `/coins/{id}/market_chart/range`, reduced
//! to daily medians.

use chrono::Utc;
use tracing::warn;

use crate::client::MarketSource;
use crate::config::LOOKBACK_SECS;
use crate::error::{Result, SnapshotError};
use crate::fetched::Fetched;
use crate::median::reduce_to_medians;

// ---------------------------------------------------------------------------
// LookbackWindow
// ---------------------------------------------------------------------------

/// Unix-second range covering the 30 days that end at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub from: i64,
    pub to: i64,
}

impl LookbackWindow {
    pub fn ending_at(to: i64) -> Self {
        Self {
            from: to - LOOKBACK_SECS,
            to,
        }
    }

    /// The 30 days ending now.
    pub fn now() -> Self {
        Self::ending_at(Utc::now().timestamp())
    }
}

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

/// Query interface for the daily-median price history.
pub struct HistoryQuery<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: MarketSource + ?Sized> HistoryQuery<'a, S> {
    /// Create a new `HistoryQuery` bound to the given source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch the price series inside `window` and reduce it to 30 daily
    /// medians, propagating any failure.
    ///
    /// Fails with [`SnapshotError::MissingAssetId`] for an empty id (no
    /// request is made) and with [`SnapshotError::InvalidInputLength`] when
    /// the API returns anything other than 720 prices.
    pub async fn try_daily_medians_in(&self, asset: &str, window: LookbackWindow) -> Result<Vec<f64>> {
        if asset.is_empty() {
            return Err(SnapshotError::MissingAssetId);
        }
        let chart = self
            .source
            .market_chart_range(asset, window.from, window.to)
            .await?;
        reduce_to_medians(&chart.price_values())
    }

    /// [`try_daily_medians_in`](Self::try_daily_medians_in) over the 30 days
    /// ending now.
    pub async fn try_daily_medians(&self, asset: &str) -> Result<Vec<f64>> {
        self.try_daily_medians_in(asset, LookbackWindow::now()).await
    }

    /// Fail-soft variant of [`try_daily_medians`](Self::try_daily_medians).
    ///
    /// Failures, including a wrong-length series, are logged and returned as
    /// [`Fetched::Failed`]; [`Fetched::into_value`] then yields an empty
    /// series.
    pub async fn daily_medians(&self, asset: &str) -> Fetched<Vec<f64>> {
        let result = self.try_daily_medians(asset).await;
        if let Err(e) = &result {
            warn!(asset, error = %e, "failed to fetch historical prices");
        }
        result.into()
    }
}
