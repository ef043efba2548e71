#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing asset id")]
    MissingAssetId,

    #[error("Invalid input length: expected {expected} prices, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
