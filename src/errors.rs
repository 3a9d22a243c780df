use thiserror::Error;

/// Error type for the fallible edges of the tracker: configuration I/O and boundary parsing.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown reminder tone: {0}")]
    UnknownTone(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
