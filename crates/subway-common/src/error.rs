//! Error types shared across the subway crates

use thiserror::Error;

/// Result type alias for subway operations
pub type Result<T> = std::result::Result<T, SubwayError>;

/// Errors that are not tied to a single feature
#[derive(Error, Debug)]
pub enum SubwayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid network description: {0}")]
    InvalidNetwork(String),
}
