//! Error types for pagetone-core
//!
//! Provides a unified error type for the core data model. Each variant
//! captures enough context for diagnostics without exposing internal
//! implementation details.

use thiserror::Error;

/// pagetone core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero, or too large to address)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * 4
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the image
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height} image")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
