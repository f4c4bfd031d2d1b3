//! Error types for notedrive.

use thiserror::Error;

/// Common error type for notedrive.
#[derive(Error, Debug)]
pub enum NoteDriveError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found at the storage provider.
    #[error("{0} not found")]
    NotFound(String),

    /// Failure talking to the storage provider.
    ///
    /// Covers token acquisition failures, transport errors and any
    /// provider response other than "item not found". Never shown to
    /// API clients verbatim.
    #[error("upstream error: {0}")]
    Upstream(String),
}

/// Result type alias for notedrive operations.
pub type Result<T> = std::result::Result<T, NoteDriveError>;
