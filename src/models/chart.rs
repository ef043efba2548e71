use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MarketChart — Historical series (`/coins/{id}/market_chart/range`)
// ---------------------------------------------------------------------------

/// Historical market data, each series a list of `(timestamp_ms, value)`
/// pairs in ascending time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}

impl MarketChart {
    /// Price component of each point; timestamps, market caps and volumes
    /// are dropped.
    pub fn price_values(&self) -> Vec<f64> {
        self.prices.iter().map(|&(_, price)| price).collect()
    }
}
