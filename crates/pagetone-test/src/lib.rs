//! pagetone-test - Regression test support for pagetone
//!
//! Provides the [`RegParams`] comparison tracker used by the `tests/`
//! regression files, plus shared constructors for deterministic test
//! images.
//!
//! # Usage
//!
//! ```
//! use pagetone_test::{RegParams, uniform_image};
//!
//! let mut rp = RegParams::new("example");
//! let image = uniform_image(4, 4, [10, 20, 30, 255]);
//! rp.compare_values(4.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use pagetone_core::RasterImage;

/// Build an image filled with one RGBA value.
pub fn uniform_image(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
    let mut image = RasterImage::new(width, height).expect("valid test dimensions");
    for px in image.pixels_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
    image
}

/// Build a deterministic non-uniform image exercising all four channels.
///
/// Channel values vary with position so neighboring pixels differ in
/// every channel, including alpha.
pub fn gradient_image(width: u32, height: u32) -> RasterImage {
    let mut image = RasterImage::new(width, height).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let rgba = [
                ((x * 37 + 11) % 256) as u8,
                ((y * 53 + 7) % 256) as u8,
                (((x + y) * 29 + 3) % 256) as u8,
                (200 + (x + 2 * y) % 56) as u8,
            ];
            image
                .set_pixel(x, y, rgba)
                .expect("coordinates inside image");
        }
    }
    image
}

/// The 2x2 end-to-end fixture: red, green, blue and white pixels in
/// row-major order, all fully opaque.
pub fn sample_2x2() -> RasterImage {
    RasterImage::from_vec(
        2,
        2,
        vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255,
        ],
    )
    .expect("fixture buffer matches dimensions")
}
