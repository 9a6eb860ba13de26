use thiserror::Error;

/// All errors that can occur in citefold-core.
#[derive(Debug, Error)]
pub enum CitefoldError {
    #[error("unknown match strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown keep preference: {0}")]
    UnknownKeepPreference(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("title similarity threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CitefoldError>;
