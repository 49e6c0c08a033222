//! Shared in-memory `DocumentSource` backend for integration tests.
//!
//! Builds synthetic documents page by page with controllable statistics,
//! image objects, and failure injection, without touching a real PDF
//! backend.

#![allow(dead_code)]

use pdf_harvest::error::{Error, Result};
use pdf_harvest::geometry::Rect;
use pdf_harvest::raster::{PixelFormat, RasterImage};
use pdf_harvest::source::{DocumentSource, ImageObject, RenderParams, VectorCounts};

/// Route `log` output through the test harness. Safe to call from every
/// test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An embedded image placed on a synthetic page.
#[derive(Debug, Clone)]
pub struct MemoryImage {
    pub rect: Rect,
    pub width: u32,
    pub height: u32,
    /// Gray fill byte used for the decoded pixels
    pub fill: u8,
    /// When set, decoding this object fails
    pub corrupt: bool,
}

impl MemoryImage {
    pub fn new(rect: Rect, width: u32, height: u32, fill: u8) -> Self {
        Self {
            rect,
            width,
            height,
            fill,
            corrupt: false,
        }
    }

    pub fn corrupt(mut self) -> Self {
        self.corrupt = true;
        self
    }
}

/// One synthetic page.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    pub width: f32,
    pub height: f32,
    pub text_chars: u64,
    pub vector: VectorCounts,
    pub images: Vec<MemoryImage>,
    /// Gray fill byte used for full-page renders of this page
    pub render_fill: u8,
    /// When set, all content reads for this page fail
    pub unreadable: bool,
    /// When set, full-page rendering of this page fails
    pub render_fails: bool,
}

impl MemoryPage {
    /// A blank US-letter page.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            text_chars: 0,
            vector: VectorCounts::default(),
            images: Vec::new(),
            render_fill: 0x80,
            unreadable: false,
            render_fails: false,
        }
    }

    pub fn with_text(mut self, chars: u64) -> Self {
        self.text_chars = chars;
        self
    }

    pub fn with_lines(mut self, lines: u64) -> Self {
        self.vector.lines = lines;
        self
    }

    pub fn with_image(mut self, image: MemoryImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_render_fill(mut self, fill: u8) -> Self {
        self.render_fill = fill;
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    pub fn render_fails(mut self) -> Self {
        self.render_fails = true;
        self
    }
}

/// A synthetic in-memory document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub creator: Option<String>,
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    pub fn new(pages: Vec<MemoryPage>) -> Self {
        Self {
            creator: None,
            pages,
        }
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    fn page(&self, page: usize) -> Result<&MemoryPage> {
        let p = self.pages.get(page).ok_or_else(|| Error::PageRead {
            page,
            reason: "page out of range".to_string(),
        })?;
        if p.unreadable {
            return Err(Error::PageRead {
                page,
                reason: "synthetic parse failure".to_string(),
            });
        }
        Ok(p)
    }
}

impl DocumentSource for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn creator(&self) -> Option<String> {
        self.creator.clone()
    }

    fn page_size(&self, page: usize) -> Result<(f32, f32)> {
        let p = self.page(page)?;
        Ok((p.width, p.height))
    }

    fn text_char_count(&self, page: usize) -> Result<u64> {
        Ok(self.page(page)?.text_chars)
    }

    fn vector_counts(&self, page: usize) -> Result<VectorCounts> {
        Ok(self.page(page)?.vector)
    }

    fn image_objects(&self, page: usize) -> Result<Vec<ImageObject>> {
        let p = self.page(page)?;
        Ok(p.images
            .iter()
            .enumerate()
            .map(|(i, img)| ImageObject {
                object_id: i as u64,
                rect: img.rect,
                width: img.width,
                height: img.height,
            })
            .collect())
    }

    fn render_page(&self, page: usize, params: &RenderParams) -> Result<RasterImage> {
        let p = self.page(page)?;
        if p.render_fails {
            return Err(Error::Render {
                page,
                reason: "synthetic render failure".to_string(),
            });
        }
        let scale = params.dpi as f32 / 72.0;
        let width = (p.width * scale).ceil() as u32;
        let height = (p.height * scale).ceil() as u32;
        let pixels = vec![p.render_fill; width as usize * height as usize];
        RasterImage::new(width, height, PixelFormat::Gray8, pixels)
    }

    fn decode_image(&self, page: usize, object: &ImageObject) -> Result<RasterImage> {
        let p = self.page(page)?;
        let img = p
            .images
            .get(object.object_id as usize)
            .ok_or_else(|| Error::Decode {
                page,
                reason: "unknown object id".to_string(),
            })?;
        if img.corrupt {
            return Err(Error::Decode {
                page,
                reason: "synthetic decode failure".to_string(),
            });
        }
        let pixels = vec![img.fill; img.width as usize * img.height as usize];
        RasterImage::new(img.width, img.height, PixelFormat::Gray8, pixels)
    }
}
