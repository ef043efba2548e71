//! Query modules for the CoinGecko snapshot SDK.
//!
//! Each module provides a query struct that borrows a
//! [`MarketSource`](crate::client::MarketSource) and exposes a propagating
//! `try_*` method next to a fail-soft method returning
//! [`Fetched`](crate::fetched::Fetched).

pub mod history;
pub mod prices;

pub use history::{HistoryQuery, LookbackWindow};
pub use prices::PriceQuery;
