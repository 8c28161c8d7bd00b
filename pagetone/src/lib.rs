//! pagetone - Page raster filtering for document pipelines
//!
//! pagetone applies a fixed catalog of visual filters (tonal, color-space,
//! and spatial-convolution) to RGBA rasters rendered from document pages,
//! then re-encodes the filtered pages into a multi-page PDF.
//!
//! # Overview
//!
//! - [`RasterImage`] - an owned RGBA8 page raster, one per document page
//! - [`filter`] - the filter transform engine: eleven filters dispatched
//!   through a closed [`filter::FilterKind`] enumeration
//! - [`io`] - output encoding: multi-page PDF and single-page PNG
//!
//! # Example
//!
//! ```
//! use pagetone::RasterImage;
//! use pagetone::filter::{self, FilterKind};
//!
//! // One page rendered by an external collaborator
//! let mut page = RasterImage::new(640, 480).unwrap();
//! filter::apply(&mut page, FilterKind::Sepia).unwrap();
//!
//! // Re-encode the filtered page sequence
//! let pdf = pagetone::io::write_pdf_mem(&page, &Default::default()).unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pagetone_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pagetone_filter as filter;
pub use pagetone_io as io;
