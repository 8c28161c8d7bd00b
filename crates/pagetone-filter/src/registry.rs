//! Filter registry - the closed catalog of supported filters
//!
//! Maps each [`FilterKind`] to the transform it invokes, and exposes the
//! two operations the UI layer builds on: enumerate the known filters in a
//! stable order, and apply one filter (by kind or by name) to a page.
//!
//! Dispatch is an exhaustive `match` over the closed enum, so adding a
//! kind without wiring its transform fails to compile.

use crate::{FilterResult, convolve, point};
use pagetone_core::RasterImage;
use std::fmt;
use std::str::FromStr;

/// The eleven supported filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Invert each color channel
    Invert,
    /// Replace color channels with their average
    BlackAndWhite,
    /// Warm-tone sepia remap
    Sepia,
    /// Scale channels up by a fixed gain
    Brightness,
    /// Stretch channels away from the midpoint
    Contrast,
    /// 4-neighbor average blur (order-dependent, border excluded)
    Blur,
    /// 3x3 sharpening convolution
    Sharpen,
    /// Binarize into two fixed gray levels
    Threshold,
    /// Fixed 30 degree rotation in the RG plane
    HueRotate,
    /// Push channels away from the per-pixel average
    Saturate,
    /// Average with a fixed purple tint
    Colorize,
}

impl FilterKind {
    /// All supported kinds, in the stable order the UI presents them.
    pub const ALL: [FilterKind; 11] = [
        FilterKind::Invert,
        FilterKind::BlackAndWhite,
        FilterKind::Sepia,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Threshold,
        FilterKind::HueRotate,
        FilterKind::Saturate,
        FilterKind::Colorize,
    ];

    /// The filter's identifier, used for name-based dispatch.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Invert => "invert",
            FilterKind::BlackAndWhite => "blackAndWhite",
            FilterKind::Sepia => "sepia",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Threshold => "threshold",
            FilterKind::HueRotate => "hueRotate",
            FilterKind::Saturate => "saturate",
            FilterKind::Colorize => "colorize",
        }
    }

    /// Human-readable label: the identifier with its first character
    /// uppercased (`blackAndWhite` becomes `BlackAndWhite`).
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Look up a kind by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = crate::FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::FilterError::UnknownFilter(s.to_string()))
    }
}

/// Enumerate the supported filters in their stable order.
pub fn list_filters() -> &'static [FilterKind] {
    &FilterKind::ALL
}

/// Apply one filter to one page, mutating it in place.
///
/// The image's consistency is checked before anything is written, so a
/// failing apply leaves the page unmodified. The image is never resized
/// and alpha passes through unchanged for every kind.
pub fn apply(image: &mut RasterImage, kind: FilterKind) -> FilterResult<()> {
    image.check_consistency()?;

    match kind {
        FilterKind::Invert => point::invert(image),
        FilterKind::BlackAndWhite => point::black_and_white(image),
        FilterKind::Sepia => point::sepia(image),
        FilterKind::Brightness => point::brightness(image),
        FilterKind::Contrast => point::contrast(image),
        FilterKind::Blur => convolve::blur(image)?,
        FilterKind::Sharpen => convolve::sharpen(image)?,
        FilterKind::Threshold => point::threshold(image),
        FilterKind::HueRotate => point::hue_rotate(image),
        FilterKind::Saturate => point::saturate(image),
        FilterKind::Colorize => point::colorize(image),
    }

    Ok(())
}

/// Apply one filter to every page of a document, in order.
///
/// Stops at the first error; pages before the failing one keep their
/// filtered state, the failing page is left unmodified.
pub fn apply_all(pages: &mut [RasterImage], kind: FilterKind) -> FilterResult<()> {
    for page in pages.iter_mut() {
        apply(page, kind)?;
    }
    Ok(())
}
