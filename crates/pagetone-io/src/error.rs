//! Error types for pagetone-io

use thiserror::Error;

/// Errors that can occur while encoding pages
#[derive(Debug, Error)]
pub enum IoError {
    /// Core data model error
    #[error("core error: {0}")]
    Core(#[from] pagetone_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Encoding failed
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type for encoding operations
pub type IoResult<T> = Result<T, IoError>;
