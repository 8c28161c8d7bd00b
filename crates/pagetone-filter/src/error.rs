//! Error types for pagetone-filter
//!
//! The engine performs no I/O, so the taxonomy is narrow: the two
//! precondition violations (malformed kernel, inconsistent raster) and the
//! string-dispatch failure. No filter ever fails on image content; numeric
//! edge cases are handled by clamping.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core data model error
    #[error("core error: {0}")]
    Core(#[from] pagetone_core::Error),

    /// Kernel is not square or not odd-sized (rejected at construction)
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Filter name does not match any known kind
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
