//! Daily-median reduction of a 30-day price series.
//!
//! The market-chart endpoint returns one price every 30 minutes for a 30 day
//! window, i.e. 720 points. [`reduce_to_medians`] splits them into 30
//! consecutive blocks of 24 and keeps the median of each block.
//!
//! # Example
//!
//! ```rust
//! use coingecko_snapshot::median::reduce_to_medians;
//! let prices: Vec<f64> = (0..720).map(|i| i as f64).collect();
//! let medians = reduce_to_medians(&prices).unwrap();
//! assert_eq!(medians.len(), 30);
//! assert_eq!(medians[0], 11.5);
//! ```

use crate::config::{EXPECTED_POINTS, SAMPLES_PER_DAY};
use crate::error::{Result, SnapshotError};

/// Reduce exactly 720 prices to 30 daily medians, day one first.
///
/// Any other input length fails with [`SnapshotError::InvalidInputLength`].
pub fn reduce_to_medians(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() != EXPECTED_POINTS {
        return Err(SnapshotError::InvalidInputLength {
            expected: EXPECTED_POINTS,
            actual: prices.len(),
        });
    }

    Ok(prices
        .chunks_exact(SAMPLES_PER_DAY)
        .filter_map(median)
        .collect())
}

/// Median of a slice; `None` when empty.
///
/// Even lengths average the two central values, odd lengths take the
/// central one. The input is not reordered.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
