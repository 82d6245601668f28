//! Error types for paws.

use thiserror::Error;

use crate::datetime::DateParseError;

/// Errors that can occur in paws operations.
///
/// Problems found while extracting properties are never errors: a malformed
/// line only leaves its field unset. Everything here is a hard failure.
#[derive(Error, Debug)]
pub enum PawsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid timestamp: {0}")]
    DateParse(#[from] DateParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for paws operations.
pub type PawsResult<T> = Result<T, PawsError>;
