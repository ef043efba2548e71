//! Fail-soft fetch outcomes.
//!
//! A failed fetch never aborts a snapshot: it degrades to an empty value.
//! [`Fetched`] keeps the reason around so callers can still tell a failed
//! fetch apart from an asset that simply has no data.

use crate::error::{Result, SnapshotError};

/// Outcome of a single fail-soft fetch.
#[derive(Debug)]
pub enum Fetched<T> {
    /// The fetch succeeded.
    Ready(T),
    /// The fetch failed and was absorbed.
    Failed(SnapshotError),
}

impl<T> Fetched<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Fetched::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    /// The fetched value, if the fetch succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Fetched::Ready(value) => Some(value),
            Fetched::Failed(_) => None,
        }
    }

    /// The failure reason, if the fetch failed.
    pub fn failure(&self) -> Option<&SnapshotError> {
        match self {
            Fetched::Ready(_) => None,
            Fetched::Failed(err) => Some(err),
        }
    }

    /// Convert back into a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<T> {
        match self {
            Fetched::Ready(value) => Ok(value),
            Fetched::Failed(err) => Err(err),
        }
    }
}

impl<T: Default> Fetched<T> {
    /// The fetched value, or the empty default on failure.
    pub fn into_value(self) -> T {
        match self {
            Fetched::Ready(value) => value,
            Fetched::Failed(_) => T::default(),
        }
    }
}

impl<T> From<Result<T>> for Fetched<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Fetched::Ready(value),
            Err(err) => Fetched::Failed(err),
        }
    }
}
