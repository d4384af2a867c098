use thiserror::Error;

/// Error for AdId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for advertisement operations
#[derive(Debug, Clone, Error)]
pub enum AdError {
    #[error("Invalid ad ID: {0}")]
    InvalidAdId(#[from] AdIdError),

    #[error("Ad not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
