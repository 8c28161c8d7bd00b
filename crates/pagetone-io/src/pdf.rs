//! PDF document output (write-only)
//!
//! Re-encodes a filtered page sequence into a multi-page PDF: one image
//! per page, in input order. Each image is scaled to the configured output
//! page width with its aspect ratio preserved, and embedded as a
//! Flate-compressed DeviceRGB XObject drawn to fill the page. Alpha is
//! stripped; output pages are opaque.

use crate::{IoError, IoResult};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pagetone_core::RasterImage;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use std::io::Write;

/// Output page width in points for an A4 portrait page.
const A4_PAGE_WIDTH: f32 = 595.28;

/// Deflate compression level for embedded image streams.
const FLATE_LEVEL: u8 = 6;

/// PDF output options
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Output page width in points; every page uses this width and a
    /// height derived from the image's aspect ratio
    pub page_width: f32,
    /// Document title
    pub title: Option<String>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_width: A4_PAGE_WIDTH,
            title: None,
        }
    }
}

impl PdfOptions {
    /// Create options with a specific title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the output page width in points
    pub fn page_width(mut self, width: f32) -> Self {
        self.page_width = width;
        self
    }
}

/// Write a single page to PDF bytes
pub fn write_pdf_mem(image: &RasterImage, options: &PdfOptions) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_pdf(image, &mut buffer, options)?;
    Ok(buffer)
}

/// Write a single page to PDF
///
/// # Arguments
///
/// * `image` - The page to encode
/// * `writer` - Output destination
/// * `options` - PDF output options
pub fn write_pdf<W: Write>(image: &RasterImage, mut writer: W, options: &PdfOptions) -> IoResult<()> {
    let pdf_data = generate_pdf(std::slice::from_ref(image), options)?;
    writer.write_all(&pdf_data).map_err(IoError::Io)?;
    Ok(())
}

/// Write a page sequence to a multi-page PDF
///
/// Each image becomes one page in the output PDF, in input order.
///
/// # Arguments
///
/// * `pages` - The ordered page sequence
/// * `writer` - Output destination
/// * `options` - PDF output options
pub fn write_pdf_multi<W: Write>(
    pages: &[RasterImage],
    mut writer: W,
    options: &PdfOptions,
) -> IoResult<()> {
    let pdf_data = generate_pdf(pages, options)?;
    writer.write_all(&pdf_data).map_err(IoError::Io)?;
    Ok(())
}

/// Generate PDF data from a page sequence
fn generate_pdf(pages: &[RasterImage], options: &PdfOptions) -> IoResult<Vec<u8>> {
    if pages.is_empty() {
        return Err(IoError::InvalidData("no pages provided".to_string()));
    }
    if !(options.page_width.is_finite() && options.page_width > 0.0) {
        return Err(IoError::InvalidData(format!(
            "page width must be positive, got {}",
            options.page_width
        )));
    }
    for page in pages {
        page.check_consistency()?;
    }

    let mut pdf = Pdf::new();

    // Object reference allocation
    // Structure: Catalog(1), Pages(2), [Page(3+i*3), Contents(4+i*3), XObject(5+i*3)]...
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);

    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new((3 + i * 3) as i32))
        .collect();

    pdf.catalog(catalog_id).pages(pages_id);

    if let Some(ref title) = options.title {
        let info_id = Ref::new((3 + pages.len() * 3) as i32);
        pdf.document_info(info_id).title(TextStr(title));
    }

    pdf.pages(pages_id)
        .kids(page_refs.iter().copied())
        .count(pages.len() as i32);

    for (i, image) in pages.iter().enumerate() {
        let page_id = Ref::new((3 + i * 3) as i32);
        let contents_id = Ref::new((4 + i * 3) as i32);
        let image_id = Ref::new((5 + i * 3) as i32);

        write_page(&mut pdf, image, page_id, pages_id, contents_id, image_id, options);
    }

    Ok(pdf.finish())
}

/// Write a single page to the PDF
fn write_page(
    pdf: &mut Pdf,
    image: &RasterImage,
    page_id: Ref,
    pages_id: Ref,
    contents_id: Ref,
    image_id: Ref,
    options: &PdfOptions,
) {
    let width = image.width();
    let height = image.height();

    // Page geometry: fixed width, height preserving the image aspect ratio
    let width_pt = options.page_width;
    let height_pt = height as f32 * width_pt / width as f32;

    // Embed the image as Flate-compressed DeviceRGB (alpha stripped)
    let compressed = compress_to_vec_zlib(&rgb_bytes(image), FLATE_LEVEL);

    let mut xobject = pdf.image_xobject(image_id, &compressed);
    xobject.filter(Filter::FlateDecode);
    xobject.width(width as i32);
    xobject.height(height as i32);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    xobject.finish();

    // Page contents: draw the image to fill the page.
    // PDF coordinates have the origin at bottom-left with Y increasing
    // upward; the unit image square is scaled to the page size.
    let mut content = Content::new();
    content.save_state();
    content.transform([width_pt, 0.0, 0.0, height_pt, 0.0, 0.0]);
    content.x_object(Name(b"Im0"));
    content.restore_state();
    pdf.stream(contents_id, &content.finish());

    let mut page = pdf.page(page_id);
    page.parent(pages_id);
    page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt));
    page.contents(contents_id);
    page.resources().x_objects().pair(Name(b"Im0"), image_id);
    page.finish();
}

/// Strip alpha from the RGBA buffer, yielding packed RGB bytes.
fn rgb_bytes(image: &RasterImage) -> Vec<u8> {
    let mut data = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);
    for px in image.pixels().chunks_exact(4) {
        data.extend_from_slice(&px[..3]);
    }
    data
}
