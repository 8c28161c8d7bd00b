//! Point filters - per-pixel tonal and color transforms
//!
//! Each filter reads only the pixel's own original value, computes new RGB
//! channels in floating point, and stores them with the clamp-and-store rule
//! from [`channel::clamp_channel`]. The alpha byte is never read or written.
//!
//! All tuning values are fixed constants owned by the filter; none are
//! caller-supplied.

use pagetone_core::RasterImage;
use pagetone_core::channel::{self, clamp_channel, rgb_average};

/// Gain applied by the brightness filter.
const BRIGHTNESS_GAIN: f32 = 1.2;

/// Gain applied by the contrast filter around its pivot.
const CONTRAST_GAIN: f32 = 1.2;
/// Midpoint the contrast filter pivots on.
const CONTRAST_PIVOT: f32 = 128.0;

/// Luminance cutoff separating the two threshold output levels.
const THRESHOLD_CUTOFF: f32 = 150.0;
/// Output level for pixels whose average falls below the cutoff.
const THRESHOLD_DARK: u8 = 100;
/// Output level for pixels at or above the cutoff.
const THRESHOLD_LIGHT: u8 = 200;

/// Fixed hue rotation angle, in degrees.
const HUE_ROTATE_DEGREES: f32 = 30.0;

/// Gain applied by the saturate filter away from the per-pixel average.
const SATURATE_GAIN: f32 = 1.2;

/// Fixed RGB tint the colorize filter averages every pixel with.
const COLORIZE_TINT: [f32; 3] = [80.0, 50.0, 120.0];

/// Sepia mixing weights, one row of (r, g, b) factors per output channel.
const SEPIA_RED: [f32; 3] = [0.35, 0.68, 0.17];
const SEPIA_GREEN: [f32; 3] = [0.34, 0.65, 0.15];
const SEPIA_BLUE: [f32; 3] = [0.27, 0.53, 0.13];

/// Invert each color channel: `c' = 255 - c`.
///
/// Applying invert twice restores the original image exactly, since the
/// result always stays in `[0, 255]`.
pub fn invert(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        px[channel::RED] = 255 - px[channel::RED];
        px[channel::GREEN] = 255 - px[channel::GREEN];
        px[channel::BLUE] = 255 - px[channel::BLUE];
    }
}

/// Replace each pixel's color channels with their average.
pub fn black_and_white(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        let avg = clamp_channel(rgb_average(
            px[channel::RED],
            px[channel::GREEN],
            px[channel::BLUE],
        ));
        px[channel::RED] = avg;
        px[channel::GREEN] = avg;
        px[channel::BLUE] = avg;
    }
}

/// Warm-tone sepia remap.
///
/// Each output channel is a weighted mix of the original RGB values. The
/// weights are non-negative, so only the upper bound can be exceeded.
pub fn sepia(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        let r = px[channel::RED] as f32;
        let g = px[channel::GREEN] as f32;
        let b = px[channel::BLUE] as f32;
        px[channel::RED] = clamp_channel(SEPIA_RED[0] * r + SEPIA_RED[1] * g + SEPIA_RED[2] * b);
        px[channel::GREEN] =
            clamp_channel(SEPIA_GREEN[0] * r + SEPIA_GREEN[1] * g + SEPIA_GREEN[2] * b);
        px[channel::BLUE] =
            clamp_channel(SEPIA_BLUE[0] * r + SEPIA_BLUE[1] * g + SEPIA_BLUE[2] * b);
    }
}

/// Multiply each color channel by the brightness gain.
pub fn brightness(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        for c in channel::RED..=channel::BLUE {
            px[c] = clamp_channel(px[c] as f32 * BRIGHTNESS_GAIN);
        }
    }
}

/// Stretch each color channel away from the midpoint:
/// `c' = (c - 128) * gain + 128`.
///
/// Intermediate values can go negative or exceed 255; the store clamp
/// saturates them.
pub fn contrast(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        for c in channel::RED..=channel::BLUE {
            px[c] = clamp_channel((px[c] as f32 - CONTRAST_PIVOT) * CONTRAST_GAIN + CONTRAST_PIVOT);
        }
    }
}

/// Binarize into two fixed gray levels.
///
/// Pixels whose RGB average falls below the cutoff become gray level 100,
/// all others gray level 200. Output channels never take any other value.
pub fn threshold(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        let avg = rgb_average(px[channel::RED], px[channel::GREEN], px[channel::BLUE]);
        let level = if avg < THRESHOLD_CUTOFF {
            THRESHOLD_DARK
        } else {
            THRESHOLD_LIGHT
        };
        px[channel::RED] = level;
        px[channel::GREEN] = level;
        px[channel::BLUE] = level;
    }
}

/// Rotate (r, g) by a fixed 30 degree angle in the RG plane.
///
/// Blue is left untouched. The rotation can push red negative and green
/// above 255; the store clamp saturates both.
pub fn hue_rotate(image: &mut RasterImage) {
    let (sin, cos) = HUE_ROTATE_DEGREES.to_radians().sin_cos();
    for px in image.pixels_mut().chunks_exact_mut(4) {
        let r = px[channel::RED] as f32;
        let g = px[channel::GREEN] as f32;
        px[channel::RED] = clamp_channel(r * cos - g * sin);
        px[channel::GREEN] = clamp_channel(r * sin + g * cos);
    }
}

/// Push each color channel away from the pixel's average:
/// `c' = avg + (c - avg) * gain`.
pub fn saturate(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        let avg = rgb_average(px[channel::RED], px[channel::GREEN], px[channel::BLUE]);
        for c in channel::RED..=channel::BLUE {
            px[c] = clamp_channel(avg + (px[c] as f32 - avg) * SATURATE_GAIN);
        }
    }
}

/// Average each pixel with the fixed purple tint (80, 50, 120).
pub fn colorize(image: &mut RasterImage) {
    for px in image.pixels_mut().chunks_exact_mut(4) {
        for c in channel::RED..=channel::BLUE {
            px[c] = clamp_channel((px[c] as f32 + COLORIZE_TINT[c]) / 2.0);
        }
    }
}
