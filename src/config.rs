use std::env;
use std::time::Duration;

use crate::error::{Result, SnapshotError};

pub const API_URL_VAR: &str = "COINGECKO_URL";
pub const API_KEY_VAR: &str = "COINGECKO_API_KEY";
pub const TIMEOUT_VAR: &str = "COINGECKO_TIMEOUT_SECS";

pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";
pub const VS_CURRENCY: &str = "usd";
pub const PRECISION: &str = "2";

pub const LOOKBACK_DAYS: usize = 30;
pub const SAMPLES_PER_DAY: usize = 24;
/// 30 days of 30-minute samples.
pub const EXPECTED_POINTS: usize = LOOKBACK_DAYS * SAMPLES_PER_DAY;
pub const LOOKBACK_SECS: i64 = LOOKBACK_DAYS as i64 * 24 * 60 * 60;

pub const INTERVAL_LABEL: &str = "Last 30 days";

pub const DEFAULT_ASSETS: [&str; 3] = ["bitcoin", "ethereum", "solana"];

/// Connection settings for the CoinGecko API.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    /// Client-wide request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create a config, rejecting an empty base URL or API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();
        if base_url.trim().is_empty() {
            return Err(SnapshotError::Config(format!("{API_URL_VAR} must be set")));
        }
        if api_key.trim().is_empty() {
            return Err(SnapshotError::Config(format!("{API_KEY_VAR} must be set")));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: None,
        })
    }

    /// Read the config from `COINGECKO_URL`, `COINGECKO_API_KEY` and the
    /// optional `COINGECKO_TIMEOUT_SECS`.
    ///
    /// A missing URL or key is an error; nothing is requested before both
    /// are known.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_VAR).unwrap_or_default();
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        let mut config = Self::new(base_url, api_key)?;

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SnapshotError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
