//! Convolution kernels
//!
//! Defines the kernel structure used by the convolution engine. Kernels
//! are always square with an odd side length, so every tap has a defined
//! offset from the center; both properties are enforced at construction
//! and never re-checked at apply time.

use crate::{FilterError, FilterResult};

/// A square, odd-sized 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd, >= 1)
    size: usize,
    /// Kernel weights (row-major order, `size * size` entries)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is zero or even,
    /// or if `data` does not hold exactly `size * size` weights.
    pub fn from_slice(size: usize, data: &[f32]) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size must be a positive odd number, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(FilterError::InvalidKernel(format!(
                "kernel data length {} does not match {size}x{size}",
                data.len()
            )));
        }
        Ok(Self {
            size,
            data: data.to_vec(),
        })
    }

    /// The fixed 3x3 sharpening kernel.
    ///
    /// Weights sum to zero, so flat regions convolve to zero rather than
    /// being preserved.
    pub fn sharpen() -> Self {
        Self {
            size: 3,
            data: vec![0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    /// Get the kernel side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the center offset, `floor(size / 2)`.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Get the weight at column `kx`, row `ky`.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f32 {
        self.data[ky * self.size + kx]
    }

    /// Get the kernel weights (row-major).
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the sum of all kernel weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
