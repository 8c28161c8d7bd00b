//! Filter engine regression test
//!
//! End-to-end scenarios over the full filter catalog: the 2x2 invert
//! fixture, the flat-image sharpen case, threshold's two-level output,
//! and the alpha and involution invariants across every kind.

use pagetone_filter::{FilterKind, apply, apply_all, list_filters};
use pagetone_test::{RegParams, gradient_image, sample_2x2, uniform_image};

#[test]
fn filters_reg() {
    let mut rp = RegParams::new("filters");

    // --- Catalog shape ---

    let kinds = list_filters();
    rp.compare_values(11.0, kinds.len() as f64, 0.0);
    rp.compare_strings(kinds[0].name().as_bytes(), b"invert");
    rp.compare_strings(kinds[10].name().as_bytes(), b"colorize");
    rp.compare_strings(FilterKind::BlackAndWhite.label().as_bytes(), b"BlackAndWhite");

    // --- 2x2 invert fixture ---

    let mut image = sample_2x2();
    apply(&mut image, FilterKind::Invert).expect("invert");
    let expected = pagetone_core::RasterImage::from_vec(
        2,
        2,
        vec![
            0, 255, 255, 255, //
            255, 0, 255, 255, //
            255, 255, 0, 255, //
            0, 0, 0, 255,
        ],
    )
    .unwrap();
    rp.compare_images(&image, &expected);

    // Invert is its own inverse
    apply(&mut image, FilterKind::Invert).expect("invert twice");
    rp.compare_images(&image, &sample_2x2());

    // --- 3x3 flat sharpen ---

    let mut flat = uniform_image(3, 3, [100, 100, 100, 255]);
    apply(&mut flat, FilterKind::Sharpen).expect("sharpen");

    // Interior pixel: the zero-sum kernel cancels the flat color completely
    let center = flat.get_pixel(1, 1).unwrap();
    rp.compare_values(0.0, center[0] as f64, 0.0);
    rp.compare_values(0.0, center[1] as f64, 0.0);
    rp.compare_values(0.0, center[2] as f64, 0.0);
    rp.compare_values(255.0, center[3] as f64, 0.0);

    // Border pixels keep a positive partial sum
    for &(x, y) in &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
        let px = flat.get_pixel(x, y).unwrap();
        let positive_in_range = px[0] > 0 && px[0] <= 255;
        rp.compare_values(1.0, if positive_in_range { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Threshold: only the two fixed gray levels appear ---

    let mut noisy = gradient_image(16, 16);
    apply(&mut noisy, FilterKind::Threshold).expect("threshold");
    let mut only_two_levels = true;
    for px in noisy.pixels().chunks_exact(4) {
        for &value in &px[..3] {
            if value != 100 && value != 200 {
                only_two_levels = false;
            }
        }
    }
    rp.compare_values(1.0, if only_two_levels { 1.0 } else { 0.0 }, 0.0);

    // --- Colorize on black ---

    let mut black = uniform_image(2, 2, [0, 0, 0, 255]);
    apply(&mut black, FilterKind::Colorize).expect("colorize");
    rp.compare_images(&black, &uniform_image(2, 2, [40, 25, 60, 255]));

    // --- blackAndWhite is idempotent ---

    let mut gray_once = gradient_image(8, 8);
    apply(&mut gray_once, FilterKind::BlackAndWhite).expect("blackAndWhite");
    let mut gray_twice = gray_once.clone();
    apply(&mut gray_twice, FilterKind::BlackAndWhite).expect("blackAndWhite twice");
    rp.compare_images(&gray_once, &gray_twice);

    // --- Alpha passes through every kind, dimensions never change ---

    for &kind in list_filters() {
        let source = gradient_image(9, 7);
        let mut filtered = source.clone();
        apply(&mut filtered, kind).expect("apply");

        rp.compare_values(source.width() as f64, filtered.width() as f64, 0.0);
        rp.compare_values(source.height() as f64, filtered.height() as f64, 0.0);

        let mut alpha_preserved = true;
        for (before, after) in source
            .pixels()
            .chunks_exact(4)
            .zip(filtered.pixels().chunks_exact(4))
        {
            if before[3] != after[3] {
                alpha_preserved = false;
            }
        }
        rp.compare_values(1.0, if alpha_preserved { 1.0 } else { 0.0 }, 0.0);
    }

    // --- apply_all preserves page order ---

    let mut pages = vec![
        uniform_image(1, 1, [255, 0, 0, 255]),
        uniform_image(1, 1, [0, 255, 0, 255]),
        uniform_image(1, 1, [0, 0, 255, 255]),
    ];
    apply_all(&mut pages, FilterKind::Invert).expect("apply_all");
    rp.compare_images(&pages[0], &uniform_image(1, 1, [0, 255, 255, 255]));
    rp.compare_images(&pages[1], &uniform_image(1, 1, [255, 0, 255, 255]));
    rp.compare_images(&pages[2], &uniform_image(1, 1, [255, 255, 0, 255]));

    assert!(rp.cleanup(), "filters regression test failed");
}

#[test]
fn convolve_edge_cases_reg() {
    let mut rp = RegParams::new("convolve_edge_cases");

    // 1x1 image: every neighbor tap is out of bounds, output is defined
    let mut tiny = uniform_image(1, 1, [50, 60, 70, 80]);
    apply(&mut tiny, FilterKind::Sharpen).expect("sharpen 1x1");
    // Only the center tap contributes: 4 * channel, clamped
    rp.compare_images(&tiny, &uniform_image(1, 1, [200, 240, 255, 80]));

    // 1x1 blur has no interior and must not touch the pixel
    let mut tiny_blur = uniform_image(1, 1, [50, 60, 70, 80]);
    apply(&mut tiny_blur, FilterKind::Blur).expect("blur 1x1");
    rp.compare_images(&tiny_blur, &uniform_image(1, 1, [50, 60, 70, 80]));

    // Blur never writes the outer border
    let source = gradient_image(6, 5);
    let mut blurred = source.clone();
    apply(&mut blurred, FilterKind::Blur).expect("blur");
    let mut border_untouched = true;
    for y in 0..5 {
        for x in 0..6 {
            if (x == 0 || y == 0 || x == 5 || y == 4)
                && blurred.get_pixel(x, y) != source.get_pixel(x, y)
            {
                border_untouched = false;
            }
        }
    }
    rp.compare_values(1.0, if border_untouched { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "convolve edge case regression test failed");
}
