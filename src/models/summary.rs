use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Trend — Direction of the 30-day median series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Compare the first and last medians.
    ///
    /// An empty series (a failed history fetch) classifies as `Neutral`.
    pub fn classify(medians: &[f64]) -> Trend {
        match (medians.first(), medians.last()) {
            (Some(first), Some(last)) if first < last => Trend::Up,
            (Some(first), Some(last)) if first > last => Trend::Down,
            _ => Trend::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetSummary — View model for one asset card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssetSummary {
    /// Display name, e.g. `"Bitcoin"`.
    pub title: String,
    /// Current USD price as a display string, `"0"` when unknown.
    pub value: String,
    pub interval: String,
    pub trend: Trend,
    /// Daily medians, day one first; empty when history was unavailable.
    pub data: Vec<f64>,
}
