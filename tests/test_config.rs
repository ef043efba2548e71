//! Configuration tests: explicit config, builder validation, environment.

use coingecko_snapshot::config::{API_KEY_VAR, API_URL_VAR, TIMEOUT_VAR};
use coingecko_snapshot::{CoinGeckoSdk, Config, SnapshotError};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Config::new
// ---------------------------------------------------------------------------

#[test]
fn config_trims_trailing_slash() {
    let config = Config::new("https://api.coingecko.com/api/v3/", "key").unwrap();
    assert_eq!(config.base_url, "https://api.coingecko.com/api/v3");
    assert_eq!(config.api_key, "key");
    assert!(config.timeout.is_none());
}

#[test]
fn config_rejects_missing_url() {
    let err = Config::new("", "key").unwrap_err();
    assert!(matches!(err, SnapshotError::Config(msg) if msg.contains(API_URL_VAR)));
}

#[test]
fn config_rejects_missing_key() {
    let err = Config::new("https://example.test", "  ").unwrap_err();
    assert!(matches!(err, SnapshotError::Config(msg) if msg.contains(API_KEY_VAR)));
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_without_key_fails() {
    let result = CoinGeckoSdk::builder().base_url("https://example.test").build();
    assert!(matches!(result, Err(SnapshotError::Config(_))));
}

#[test]
fn builder_without_url_fails() {
    let result = CoinGeckoSdk::builder().api_key("key").build();
    assert!(matches!(result, Err(SnapshotError::Config(_))));
}

#[test]
fn builder_applies_settings() {
    let sdk = CoinGeckoSdk::builder()
        .base_url("https://example.test/api/v3/")
        .api_key("key")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert_eq!(sdk.config().timeout, Some(Duration::from_secs(5)));
    assert_eq!(sdk.client().base_url(), "https://example.test/api/v3");
    assert!(sdk.to_string().contains("https://example.test/api/v3"));
    assert!(!sdk.to_string().contains("key"));
}

#[test]
fn builder_rejects_key_unusable_as_header() {
    let result = CoinGeckoSdk::builder()
        .base_url("https://example.test")
        .api_key("bad\nkey")
        .build();
    assert!(matches!(result, Err(SnapshotError::Config(_))));
}

// ---------------------------------------------------------------------------
// Config::from_env
// ---------------------------------------------------------------------------

// Environment variables are process-wide, so every env scenario runs inside
// this one test.
#[test]
fn from_env_requires_url_and_key() {
    std::env::remove_var(API_URL_VAR);
    std::env::remove_var(API_KEY_VAR);
    std::env::remove_var(TIMEOUT_VAR);
    assert!(matches!(Config::from_env(), Err(SnapshotError::Config(_))));
    assert!(matches!(CoinGeckoSdk::from_env(), Err(SnapshotError::Config(_))));

    std::env::set_var(API_URL_VAR, "https://example.test/api/v3");
    assert!(matches!(Config::from_env(), Err(SnapshotError::Config(_))));

    std::env::set_var(API_KEY_VAR, "env-key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.base_url, "https://example.test/api/v3");
    assert_eq!(config.api_key, "env-key");
    assert!(config.timeout.is_none());

    std::env::set_var(TIMEOUT_VAR, "15");
    assert_eq!(Config::from_env().unwrap().timeout, Some(Duration::from_secs(15)));

    std::env::set_var(TIMEOUT_VAR, "soon");
    assert!(matches!(Config::from_env(), Err(SnapshotError::Config(_))));

    std::env::remove_var(API_URL_VAR);
    std::env::remove_var(API_KEY_VAR);
    std::env::remove_var(TIMEOUT_VAR);
}
