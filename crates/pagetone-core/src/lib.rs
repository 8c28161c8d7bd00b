//! pagetone-core - Basic data structures for page raster filtering
//!
//! This crate provides the data model shared by the pagetone workspace:
//!
//! - [`RasterImage`] - an owned RGBA8 page raster, mutated in place by filters
//! - [`Error`] / [`Result`] - the core error type
//! - [`channel`] - channel offsets and the clamp-and-store arithmetic helpers

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{BYTES_PER_PIXEL, RasterImage};

/// Channel byte offsets and arithmetic helpers for RGBA8 pixels.
///
/// # Pixel format
///
/// Pixels are stored as 4 consecutive bytes in R, G, B, A order.
pub mod channel {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Clamp-and-store: round a channel value, then constrain it to
    /// `[0, 255]`.
    ///
    /// This is the final operation of every filter store. Rounding happens
    /// before clamping, and negative or overflowing intermediates saturate
    /// rather than wrap.
    #[inline]
    pub fn clamp_channel(value: f32) -> u8 {
        value.round().clamp(0.0, 255.0) as u8
    }

    /// Per-pixel RGB average, computed in real arithmetic.
    ///
    /// The division by 3 is floating-point; rounding happens only at store
    /// time via [`clamp_channel`].
    #[inline]
    pub fn rgb_average(r: u8, g: u8, b: u8) -> f32 {
        (r as f32 + g as f32 + b as f32) / 3.0
    }

}
