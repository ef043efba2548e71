//! CoinGecko snapshot SDK for Rust.
//!
//! Fetches current USD market stats and a 30-day price history for a list of
//! assets, reduces each history to 30 daily medians, classifies the trend and
//! returns one [`AssetSummary`] per asset.
//!
//! Individual fetches fail soft: a failed request degrades to an empty value
//! (zero price, empty series) instead of failing the whole snapshot. The
//! reason is kept in [`Fetched`] for callers that want it.
//!
//! # Quick start
//!
//! ```no_run
//! use coingecko_snapshot::{CoinGeckoSdk, DEFAULT_ASSETS};
//!
//! # async fn run() -> coingecko_snapshot::Result<()> {
//! let sdk = CoinGeckoSdk::from_env()?;
//! for card in sdk.snapshot().summaries(&DEFAULT_ASSETS).await {
//!     println!("{} {} {}", card.title, card.value, card.trend);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod fetched;
pub mod median;
pub mod models;
pub mod queries;

pub use aggregator::{AssetReport, SnapshotAggregator};
pub use client::{CoinGeckoClient, MarketSource};
pub use config::{Config, DEFAULT_ASSETS};
pub use error::{Result, SnapshotError};
pub use fetched::Fetched;
pub use models::{AssetSummary, MarketChart, PriceEntry, PriceSnapshot, Trend};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CoinGeckoSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CoinGeckoSdk`] instance.
///
/// Use [`CoinGeckoSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CoinGeckoSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct CoinGeckoSdkBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl CoinGeckoSdkBuilder {
    /// Set the API base URL, e.g. `https://api.coingecko.com/api/v3`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the demo API key sent as `x-cg-demo-api-key`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a request timeout.
    ///
    /// Unset by default: a request that never answers is waited on forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the SDK.
    ///
    /// Fails with [`SnapshotError::Config`] if the base URL or API key is
    /// missing. No request is made.
    pub fn build(self) -> Result<CoinGeckoSdk> {
        let mut config = Config::new(
            self.base_url.unwrap_or_default(),
            self.api_key.unwrap_or_default(),
        )?;
        config.timeout = self.timeout;
        CoinGeckoSdk::with_config(config)
    }
}

// ---------------------------------------------------------------------------
// CoinGeckoSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns a [`CoinGeckoClient`] and exposes the query interfaces as
/// lightweight borrowing wrappers.
pub struct CoinGeckoSdk {
    config: Config,
    client: CoinGeckoClient,
}

impl CoinGeckoSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CoinGeckoSdkBuilder {
        CoinGeckoSdkBuilder::default()
    }

    /// Build the SDK from `COINGECKO_URL` / `COINGECKO_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    /// Build the SDK from an explicit [`Config`].
    pub fn with_config(config: Config) -> Result<Self> {
        let client = CoinGeckoClient::new(&config)?;
        Ok(Self { config, client })
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the current-price query interface.
    pub fn prices(&self) -> queries::PriceQuery<'_, CoinGeckoClient> {
        queries::PriceQuery::new(&self.client)
    }

    /// Access the daily-median history query interface.
    pub fn history(&self) -> queries::HistoryQuery<'_, CoinGeckoClient> {
        queries::HistoryQuery::new(&self.client)
    }

    /// Access the snapshot aggregator.
    pub fn snapshot(&self) -> SnapshotAggregator<'_, CoinGeckoClient> {
        SnapshotAggregator::new(&self.client)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return a reference to the underlying [`CoinGeckoClient`].
    pub fn client(&self) -> &CoinGeckoClient {
        &self.client
    }
}

impl fmt::Display for CoinGeckoSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoinGeckoSdk(base_url={}, timeout={:?})",
            self.config.base_url, self.config.timeout
        )
    }
}
