//! HTTP access to the CoinGecko API.
//!
//! [`MarketSource`] is the seam between the fetchers and the network. The
//! production implementation is [`CoinGeckoClient`]; tests substitute their
//! own sources.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::{self, Config};
use crate::error::{Result, SnapshotError};
use crate::models::{MarketChart, PriceSnapshot};

/// Raw market-data endpoints used by the fetchers.
///
/// Implementations return errors as-is; the fail-soft policy lives in the
/// query layer.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Current USD price, market cap, 24h volume, 24h change and last update
    /// time for one asset.
    async fn simple_price(&self, asset: &str) -> Result<PriceSnapshot>;

    /// Historical USD series for one asset between two Unix timestamps
    /// (seconds).
    async fn market_chart_range(&self, asset: &str, from: i64, to: i64) -> Result<MarketChart>;
}

/// Reqwest-backed CoinGecko client.
///
/// Every request carries `accept: application/json` and the
/// `x-cg-demo-api-key` header.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Build a client from an explicit [`Config`].
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            SnapshotError::Config("API key contains characters not allowed in a header".into())
        })?;
        headers.insert(config::API_KEY_HEADER, key);

        let mut builder = Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {} {:?}", url, query);
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketSource for CoinGeckoClient {
    #[instrument(skip(self))]
    async fn simple_price(&self, asset: &str) -> Result<PriceSnapshot> {
        let url = format!("{}/simple/price", self.base_url);
        let query = [
            ("ids", asset.to_string()),
            ("vs_currencies", config::VS_CURRENCY.to_string()),
            ("include_market_cap", "true".to_string()),
            ("include_24hr_vol", "true".to_string()),
            ("include_24hr_change", "true".to_string()),
            ("include_last_updated_at", "true".to_string()),
            ("precision", config::PRECISION.to_string()),
        ];
        self.get_json(&url, &query).await
    }

    #[instrument(skip(self))]
    async fn market_chart_range(&self, asset: &str, from: i64, to: i64) -> Result<MarketChart> {
        let url = format!("{}/coins/{}/market_chart/range", self.base_url, asset);
        let query = [
            ("vs_currency", config::VS_CURRENCY.to_string()),
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("precision", config::PRECISION.to_string()),
        ];
        self.get_json(&url, &query).await
    }
}
