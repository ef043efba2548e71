//! Current-price lookups against `/simple/price`.

use tracing::warn;

use crate::client::MarketSource;
use crate::error::{Result, SnapshotError};
use crate::fetched::Fetched;
use crate::models::PriceSnapshot;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for current market stats.
pub struct PriceQuery<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: MarketSource + ?Sized> PriceQuery<'a, S> {
    /// Create a new `PriceQuery` bound to the given source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch current stats for one asset, propagating any failure.
    ///
    /// An empty asset id fails with [`SnapshotError::MissingAssetId`] before
    /// any request is made. The returned map holds at most the requested
    /// asset; it is empty if the API has no data for it.
    pub async fn try_current(&self, asset: &str) -> Result<PriceSnapshot> {
        if asset.is_empty() {
            return Err(SnapshotError::MissingAssetId);
        }
        let mut snapshot = self.source.simple_price(asset).await?;
        snapshot.retain(|id, _| id == asset);
        Ok(snapshot)
    }

    /// Fail-soft variant of [`try_current`](Self::try_current).
    ///
    /// Failures are logged and returned as [`Fetched::Failed`];
    /// [`Fetched::into_value`] then yields an empty map.
    pub async fn current(&self, asset: &str) -> Fetched<PriceSnapshot> {
        let result = self.try_current(asset).await;
        if let Err(e) = &result {
            warn!(asset, error = %e, "failed to fetch current price");
        }
        result.into()
    }
}
