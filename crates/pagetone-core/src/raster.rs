//! RasterImage - the page raster container
//!
//! A `RasterImage` is an owned RGBA8 pixel buffer with fixed dimensions.
//! One instance represents one rendered document page.
//!
//! # Pixel layout
//!
//! - Row-major order, top-left origin
//! - 4 bytes per pixel: red, green, blue, alpha
//! - Buffer length is exactly `width * height * 4`
//!
//! # Ownership model
//!
//! A page is exclusively owned by whichever pipeline stage currently holds
//! it (renderer, filter engine, encoder) and is handed off by move. Filters
//! mutate the buffer in place through `&mut RasterImage`; no two operations
//! can mutate the same page concurrently.

use crate::error::{Error, Result};

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// An RGBA8 raster, one per document page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major RGBA)
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new image with all channels zeroed (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the buffer size would overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Create an image from an existing pixel buffer.
    ///
    /// The buffer is taken as-is; its length must be exactly
    /// `width * height * 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::DimensionMismatch`] if the buffer length does not match.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Required buffer length for the given dimensions.
    fn buffer_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutably borrow the pixel buffer.
    ///
    /// The borrow is a slice, so the buffer length (and with it the
    /// dimension invariant) cannot change through it.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image and return the pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Get the RGBA value at (x, y), or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.pixel_index(x, y);
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Set the RGBA value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if the coordinate is
    /// outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.pixel_index(x, y);
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        Ok(())
    }

    /// Re-validate the buffer length invariant.
    ///
    /// Filter application calls this before mutating anything, so a
    /// failing apply leaves the image untouched.
    pub fn check_consistency(&self) -> Result<()> {
        let expected = Self::buffer_len(self.width, self.height)?;
        if self.pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let image = RasterImage::new(3, 2).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels().len(), 3 * 2 * 4);
        assert!(image.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            RasterImage::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            RasterImage::new(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_from_vec_validates_length() {
        let ok = RasterImage::from_vec(2, 2, vec![0; 16]);
        assert!(ok.is_ok());

        let err = RasterImage::from_vec(2, 2, vec![0; 15]);
        assert!(matches!(
            err,
            Err(Error::DimensionMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_get_set_pixel() {
        let mut image = RasterImage::new(2, 2).unwrap();
        image.set_pixel(1, 0, [10, 20, 30, 40]).unwrap();
        assert_eq!(image.get_pixel(1, 0), Some([10, 20, 30, 40]));
        assert_eq!(image.get_pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(2, 0), None);
        assert!(image.set_pixel(0, 2, [0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_pixel_index_row_major() {
        let image = RasterImage::new(4, 3).unwrap();
        assert_eq!(image.pixel_index(0, 0), 0);
        assert_eq!(image.pixel_index(1, 0), 4);
        assert_eq!(image.pixel_index(0, 1), 16);
        assert_eq!(image.pixel_index(3, 2), (2 * 4 + 3) * 4);
    }

    #[test]
    fn test_check_consistency() {
        let image = RasterImage::new(5, 5).unwrap();
        assert!(image.check_consistency().is_ok());
    }

    #[test]
    fn test_into_vec_round_trip() {
        let pixels: Vec<u8> = (0..16).collect();
        let image = RasterImage::from_vec(2, 2, pixels.clone()).unwrap();
        assert_eq!(image.into_vec(), pixels);
    }
}
