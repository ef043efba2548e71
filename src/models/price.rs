use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// PriceEntry — Current market stats for one asset (`/simple/price`)
// ---------------------------------------------------------------------------

/// Market stats for a single asset in USD.
///
/// CoinGecko may send these fields as numbers or numeric strings; both are
/// accepted. Anything else reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceEntry {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd_market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd_24h_vol: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd_24h_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub last_updated_at: Option<f64>,
}

/// Asset id -> market stats. An asset the API has no data for is absent.
pub type PriceSnapshot = HashMap<String, PriceEntry>;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        Some(NumberOrText::Other(_)) | None => None,
    })
}
