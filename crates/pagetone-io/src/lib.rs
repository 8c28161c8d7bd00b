//! pagetone-io - Output encoding for filtered pages
//!
//! Consumes the (possibly filtered) ordered page sequence read-only and
//! re-encodes it:
//!
//! - [`pdf`] - multi-page PDF output, one image per page in input order,
//!   scaled to the output page width with aspect ratio preserved
//! - [`png`] - single-page RGBA PNG export
//!
//! Document *decoding* is not part of this crate; pages enter the system
//! as [`pagetone_core::RasterImage`] values produced by an external
//! renderer.

mod error;
pub mod pdf;
pub mod png;

pub use error::{IoError, IoResult};
pub use pdf::{PdfOptions, write_pdf, write_pdf_mem, write_pdf_multi};
pub use self::png::{write_png, write_png_mem};
