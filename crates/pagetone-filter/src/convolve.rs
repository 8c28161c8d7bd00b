//! Convolution engine - neighborhood-dependent filters
//!
//! The generic path, [`convolve`], reads every neighborhood from an
//! immutable snapshot of the buffer taken before any pixel is written, so
//! in-place mutation never feeds back into the sum for another pixel.
//! Out-of-bounds taps are skipped entirely: they contribute nothing, are
//! not treated as zero padding, and the partial sum is not renormalized,
//! so border pixels receive a partial, non-normalized sum.
//!
//! [`blur`] deliberately does NOT go through the generic path; see its
//! documentation for the preserved aliasing semantics.

use crate::{FilterResult, Kernel};
use pagetone_core::RasterImage;
use pagetone_core::channel::{self, clamp_channel};

/// Convolve the image with a square, odd-sized kernel.
///
/// For every pixel and each color channel independently, accumulates
/// `source[y + ky - half][x + kx - half] * kernel[ky][kx]` over the kernel
/// window, reading from a snapshot captured before mutation begins. The
/// accumulated sum is clamped to `[0, 255]` and stored. Alpha is passed
/// through unchanged.
///
/// # Errors
///
/// Returns an error only if the image fails its consistency check; no
/// kernel or image content can make the per-pixel arithmetic fail.
pub fn convolve(image: &mut RasterImage, kernel: &Kernel) -> FilterResult<()> {
    image.check_consistency()?;

    let w = image.width() as i64;
    let h = image.height() as i64;
    let half = kernel.half() as i64;
    let size = kernel.size() as i64;

    let snapshot = image.pixels().to_vec();
    let data = image.pixels_mut();

    for y in 0..h {
        for x in 0..w {
            let idx = ((y * w + x) * 4) as usize;
            let mut sum = [0.0f32; 3];

            for ky in 0..size {
                for kx in 0..size {
                    let sy = y + ky - half;
                    let sx = x + kx - half;
                    if sy < 0 || sy >= h || sx < 0 || sx >= w {
                        continue;
                    }
                    let sidx = ((sy * w + sx) * 4) as usize;
                    let weight = kernel.get(kx as usize, ky as usize);
                    sum[0] += snapshot[sidx + channel::RED] as f32 * weight;
                    sum[1] += snapshot[sidx + channel::GREEN] as f32 * weight;
                    sum[2] += snapshot[sidx + channel::BLUE] as f32 * weight;
                }
            }

            data[idx + channel::RED] = clamp_channel(sum[0]);
            data[idx + channel::GREEN] = clamp_channel(sum[1]);
            data[idx + channel::BLUE] = clamp_channel(sum[2]);
        }
    }

    Ok(())
}

/// Sharpen with the fixed 3x3 kernel via the generic convolution path.
pub fn sharpen(image: &mut RasterImage) -> FilterResult<()> {
    convolve(image, &Kernel::sharpen())
}

/// 4-neighbor average blur with preserved in-place read semantics.
///
/// For each interior pixel, each color channel becomes the average of its
/// left, right, top and bottom neighbors (center and diagonals excluded).
/// Two compatibility-critical properties of this filter must hold:
///
/// - Reads come from the buffer *while it is being mutated*, scanning
///   row-major (increasing x within increasing y), so later pixels can pick
///   up already-blurred neighbor values instead of original ones.
/// - The outer one-pixel border is never written.
///
/// Images narrower or shorter than 3 pixels have no interior and are left
/// unchanged. See [`blur_snapshot`] for the order-independent variant.
pub fn blur(image: &mut RasterImage) -> FilterResult<()> {
    image.check_consistency()?;

    let w = image.width() as usize;
    let h = image.height() as usize;
    if w < 3 || h < 3 {
        return Ok(());
    }

    let row = w * 4;
    let data = image.pixels_mut();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = (y * w + x) * 4;
            for c in channel::RED..=channel::BLUE {
                let sum = data[idx - 4 + c] as f32
                    + data[idx + 4 + c] as f32
                    + data[idx - row + c] as f32
                    + data[idx + row + c] as f32;
                data[idx + c] = clamp_channel(sum / 4.0);
            }
        }
    }

    Ok(())
}

/// Order-independent variant of [`blur`].
///
/// Identical 4-neighbor average and border exclusion, but every read comes
/// from an immutable snapshot taken before mutation, so the result does not
/// depend on scan order. This is a distinct operation: it is NOT reachable
/// from the filter registry, which keeps the compatible [`blur`].
pub fn blur_snapshot(image: &mut RasterImage) -> FilterResult<()> {
    image.check_consistency()?;

    let w = image.width() as usize;
    let h = image.height() as usize;
    if w < 3 || h < 3 {
        return Ok(());
    }

    let row = w * 4;
    let snapshot = image.pixels().to_vec();
    let data = image.pixels_mut();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = (y * w + x) * 4;
            for c in channel::RED..=channel::BLUE {
                let sum = snapshot[idx - 4 + c] as f32
                    + snapshot[idx + 4 + c] as f32
                    + snapshot[idx - row + c] as f32
                    + snapshot[idx + row + c] as f32;
                data[idx + c] = clamp_channel(sum / 4.0);
            }
        }
    }

    Ok(())
}
