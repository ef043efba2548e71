//! Print CoinGecko market snapshots as JSON.
//!
//! Reads `COINGECKO_URL` and `COINGECKO_API_KEY` from the environment (or a
//! `.env` file) and prints one summary per asset.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use coingecko_snapshot::{CoinGeckoSdk, Config, DEFAULT_ASSETS};
use futures::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Asset ids to summarise (defaults to bitcoin, ethereum, solana)
    assets: Vec<String>,

    /// Print each summary as a JSON line as soon as it is ready
    #[arg(long)]
    stream: bool,

    /// Request timeout in seconds (overrides COINGECKO_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Env file to load before reading the environment
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path).with_context(|| format!("failed to load {}", path.display()))?;
        }
        None => {
            if let Err(e) = dotenvy::dotenv() {
                // Not an error if the file doesn't exist
                if !e.not_found() {
                    eprintln!("Warning: failed to load .env: {}", e);
                }
            }
        }
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::from_env().context("CoinGecko configuration is incomplete")?;
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let sdk = CoinGeckoSdk::with_config(config)?;
    info!("{}", sdk);

    let assets: Vec<String> = if args.assets.is_empty() {
        DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect()
    } else {
        args.assets
    };

    let snapshot = sdk.snapshot();
    if args.stream {
        let mut summaries = snapshot.stream(&assets);
        while let Some((idx, summary)) = summaries.next().await {
            info!(asset = %assets[idx], trend = %summary.trend, "summary ready");
            println!("{}", serde_json::to_string(&summary)?);
        }
    } else {
        let reports = snapshot.reports(&assets).await;
        let failed = reports.iter().filter(|r| !r.is_complete()).count();
        if failed > 0 {
            warn!("{} of {} assets have incomplete data", failed, reports.len());
        }
        let summaries: Vec<_> = reports.iter().map(|r| r.summary()).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }

    Ok(())
}
