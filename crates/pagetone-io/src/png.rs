//! PNG page export (write-only)
//!
//! Exports a single page as an 8-bit RGBA PNG. The raster buffer already
//! matches the PNG sample layout, so no conversion pass is needed.

use crate::{IoError, IoResult};
use ::png::{BitDepth, ColorType, Encoder};
use pagetone_core::RasterImage;
use std::io::Write;

/// Write a page as an RGBA PNG
pub fn write_png<W: Write>(image: &RasterImage, writer: W) -> IoResult<()> {
    image.check_consistency()?;

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(image.pixels())
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {}", e)))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

/// Write a page to PNG bytes
pub fn write_png_mem(image: &RasterImage) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(image, &mut buffer)?;
    Ok(buffer)
}
