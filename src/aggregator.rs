//! Snapshot aggregation across a list of assets.
//!
//! For every asset the aggregator needs the current price and the 30-day
//! median series. Two join strategies are offered:
//!
//! * [`reports`](SnapshotAggregator::reports) /
//!   [`summaries`](SnapshotAggregator::summaries) fan out all history
//!   fetches as one group and all price fetches as another, and wait for both
//!   groups to finish before combining. A single hung request holds back the
//!   whole result.
//! * [`stream`](SnapshotAggregator::stream) joins the two fetches per asset
//!   and yields each summary as soon as that asset is complete.
//!
//! Fetch failures never surface as errors here; they are carried in each
//! [`AssetReport`].

use futures::future::{join, join_all};
use futures::stream::{FuturesUnordered, LocalBoxStream, StreamExt};

use crate::client::MarketSource;
use crate::config::INTERVAL_LABEL;
use crate::fetched::Fetched;
use crate::models::{AssetSummary, PriceSnapshot, Trend};
use crate::queries::{HistoryQuery, PriceQuery};

// ---------------------------------------------------------------------------
// AssetReport
// ---------------------------------------------------------------------------

/// Raw outcomes of both fetches for one asset.
#[derive(Debug)]
pub struct AssetReport {
    pub asset: String,
    pub price: Fetched<PriceSnapshot>,
    pub history: Fetched<Vec<f64>>,
}

impl AssetReport {
    /// Current USD price, if the price fetch succeeded and listed the asset.
    pub fn current_price(&self) -> Option<f64> {
        self.price
            .value()
            .and_then(|snapshot| snapshot.get(&self.asset))
            .and_then(|entry| entry.usd)
    }

    /// Daily medians, empty if the history fetch failed.
    pub fn medians(&self) -> &[f64] {
        self.history.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_complete(&self) -> bool {
        self.price.is_ready() && self.history.is_ready()
    }

    /// Build the view model for this asset.
    pub fn summary(&self) -> AssetSummary {
        let value = match self.current_price() {
            Some(price) => price.to_string(),
            None => "0".to_string(),
        };
        let data = self.medians().to_vec();

        AssetSummary {
            title: display_title(&self.asset),
            value,
            interval: INTERVAL_LABEL.to_string(),
            trend: Trend::classify(&data),
            data,
        }
    }
}

/// `"bitcoin"` -> `"Bitcoin"`.
pub fn display_title(asset: &str) -> String {
    let mut chars = asset.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// SnapshotAggregator
// ---------------------------------------------------------------------------

/// Builds per-asset snapshots from a [`MarketSource`].
pub struct SnapshotAggregator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: MarketSource + ?Sized> SnapshotAggregator<'a, S> {
    /// Create a new `SnapshotAggregator` bound to the given source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch everything for `assets`, joining the history group and the
    /// price group as whole batches.
    ///
    /// The result has one report per asset, in input order.
    pub async fn reports<A: AsRef<str>>(&self, assets: &[A]) -> Vec<AssetReport> {
        let prices = PriceQuery::new(self.source);
        let history = HistoryQuery::new(self.source);

        let history_group = join_all(assets.iter().map(|a| history.daily_medians(a.as_ref())));
        let price_group = join_all(assets.iter().map(|a| prices.current(a.as_ref())));
        let (histories, currents) = join(history_group, price_group).await;

        assets
            .iter()
            .zip(histories)
            .zip(currents)
            .map(|((asset, history), price)| AssetReport {
                asset: asset.as_ref().to_string(),
                price,
                history,
            })
            .collect()
    }

    /// View models for `assets`, in input order.
    pub async fn summaries<A: AsRef<str>>(&self, assets: &[A]) -> Vec<AssetSummary> {
        self.reports(assets)
            .await
            .iter()
            .map(AssetReport::summary)
            .collect()
    }

    /// Fetch both outcomes for a single asset.
    pub async fn report(&self, asset: &str) -> AssetReport {
        report_for(self.source, asset).await
    }

    /// Yield `(input_index, summary)` pairs in completion order.
    ///
    /// Each asset's two fetches are joined on their own, so a slow or hung
    /// asset does not delay the others.
    pub fn stream<'s, A>(&'s self, assets: &'s [A]) -> LocalBoxStream<'s, (usize, AssetSummary)>
    where
        A: AsRef<str>,
    {
        let source: &'s S = self.source;
        assets
            .iter()
            .enumerate()
            .map(move |(idx, asset)| async move {
                let report = report_for(source, asset.as_ref()).await;
                (idx, report.summary())
            })
            .collect::<FuturesUnordered<_>>()
            .boxed_local()
    }
}

async fn report_for<S: MarketSource + ?Sized>(source: &S, asset: &str) -> AssetReport {
    let (history, price) = join(
        HistoryQuery::new(source).daily_medians(asset),
        PriceQuery::new(source).current(asset),
    )
    .await;
    AssetReport {
        asset: asset.to_string(),
        price,
        history,
    }
}
