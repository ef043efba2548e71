//! Shared test fixtures for the CoinGecko snapshot integration tests.
//!
//! Provides price-series builders, JSON bodies shaped like the CoinGecko
//! responses, and `FakeSource`, an in-process `MarketSource` whose answers
//! (and hangs) are configured per asset.

#![allow(dead_code)]

use async_trait::async_trait;
use coingecko_snapshot::{
    CoinGeckoSdk, MarketChart, MarketSource, PriceEntry, PriceSnapshot, Result, SnapshotError,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const TEST_KEY: &str = "test-key";

// ---------------------------------------------------------------------------
// Series builders
// ---------------------------------------------------------------------------

/// 720 strictly increasing prices starting at `start`.
pub fn linear_prices(start: f64) -> Vec<f64> {
    (0..720).map(|i| start + i as f64).collect()
}

/// 720 identical prices.
pub fn constant_prices(value: f64) -> Vec<f64> {
    vec![value; 720]
}

/// 720 strictly decreasing prices ending above zero.
pub fn falling_prices(start: f64) -> Vec<f64> {
    (0..720).map(|i| start - i as f64).collect()
}

/// `/coins/{id}/market_chart/range` body for the given prices, one point
/// every 30 minutes from `from_secs`.
pub fn chart_body(prices: &[f64], from_secs: i64) -> String {
    let points: Vec<serde_json::Value> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| serde_json::json!([(from_secs + i as i64 * 1800) * 1000, p]))
        .collect();
    serde_json::json!({
        "prices": points,
        "market_caps": points,
        "total_volumes": points,
    })
    .to_string()
}

/// Build an SDK pointed at a mock server.
pub fn sdk_for(url: &str) -> CoinGeckoSdk {
    CoinGeckoSdk::builder()
        .base_url(url)
        .api_key(TEST_KEY)
        .build()
        .unwrap()
}

fn malformed_body_error() -> SnapshotError {
    SnapshotError::Json(serde_json::from_str::<serde_json::Value>("{not json").unwrap_err())
}

// ---------------------------------------------------------------------------
// FakeSource
// ---------------------------------------------------------------------------

/// In-process `MarketSource`.
///
/// Assets without a configured price return an empty snapshot; assets
/// without a configured history fail as if the body were malformed. Assets
/// in `hang_history` / `hang_price` never answer.
#[derive(Default)]
pub struct FakeSource {
    pub prices: HashMap<String, f64>,
    pub histories: HashMap<String, Vec<f64>>,
    pub hang_history: HashSet<String>,
    pub hang_price: HashSet<String>,
    pub price_calls: AtomicUsize,
    pub chart_calls: AtomicUsize,
    pub windows: Mutex<Vec<(String, i64, i64)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, asset: &str, usd: f64) -> Self {
        self.prices.insert(asset.to_string(), usd);
        self
    }

    pub fn with_history(mut self, asset: &str, prices: Vec<f64>) -> Self {
        self.histories.insert(asset.to_string(), prices);
        self
    }

    pub fn hanging_history(mut self, asset: &str) -> Self {
        self.hang_history.insert(asset.to_string());
        self
    }

    pub fn hanging_price(mut self, asset: &str) -> Self {
        self.hang_price.insert(asset.to_string());
        self
    }

    pub fn price_calls(&self) -> usize {
        self.price_calls.load(Ordering::SeqCst)
    }

    pub fn chart_calls(&self) -> usize {
        self.chart_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketSource for FakeSource {
    async fn simple_price(&self, asset: &str) -> Result<PriceSnapshot> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_price.contains(asset) {
            std::future::pending::<()>().await;
        }
        let mut snapshot = PriceSnapshot::new();
        if let Some(usd) = self.prices.get(asset) {
            snapshot.insert(
                asset.to_string(),
                PriceEntry {
                    usd: Some(*usd),
                    ..Default::default()
                },
            );
        }
        Ok(snapshot)
    }

    async fn market_chart_range(&self, asset: &str, from: i64, to: i64) -> Result<MarketChart> {
        self.chart_calls.fetch_add(1, Ordering::SeqCst);
        self.windows
            .lock()
            .unwrap()
            .push((asset.to_string(), from, to));
        if self.hang_history.contains(asset) {
            std::future::pending::<()>().await;
        }
        let prices = self.histories.get(asset).ok_or_else(malformed_body_error)?;
        Ok(MarketChart {
            prices: prices
                .iter()
                .enumerate()
                .map(|(i, p)| (((from + i as i64 * 1800) * 1000) as f64, *p))
                .collect(),
            ..Default::default()
        })
    }
}
