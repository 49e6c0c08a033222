//! The seam to the external PDF-library collaborator.
//!
//! The pipeline never parses PDF syntax itself. It consumes an already-opened,
//! read-only document through [`DocumentSource`]: per-page text/image/vector
//! enumeration, a full-page rasterization primitive, and document metadata.
//! Any PDF backend that can answer these questions can drive the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Rect;
use crate::raster::RasterImage;

/// Per-page vector drawing primitive counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorCounts {
    /// Straight line segments
    pub lines: u64,
    /// Bezier/curve segments
    pub curves: u64,
    /// Filled or stroked rectangles
    pub rects: u64,
}

impl VectorCounts {
    /// Combined vector primitive count (lines + curves + rects).
    pub fn total(&self) -> u64 {
        self.lines + self.curves + self.rects
    }
}

/// An embedded raster image object enumerated from a page's resources.
///
/// `object_id` is an opaque backend identifier (e.g. an XObject cross-reference
/// number) handed back to [`DocumentSource::decode_image`] for decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageObject {
    /// Backend-specific identifier for this object
    pub object_id: u64,
    /// Placement rectangle on the page, in page coordinates
    pub rect: Rect,
    /// Intrinsic pixel width of the stored image
    pub width: u32,
    /// Intrinsic pixel height of the stored image
    pub height: u32,
}

/// Color model for full-page rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorModel {
    /// The backend's native/device color space
    #[default]
    Device,
    /// Normalized 8-bit RGB (forced under the CAD override)
    Rgb,
}

/// Parameters for the full-page rasterization primitive.
///
/// Rendering must be deterministic for fixed parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Output resolution in pixels per page-inch
    pub dpi: u32,
    /// Output color model
    pub color: ColorModel,
    /// Whether annotation-layer content is composited into the raster
    pub include_annotations: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            dpi: 300,
            color: ColorModel::Device,
            include_annotations: false,
        }
    }
}

/// Read-only access to an opened PDF document.
///
/// Implementations wrap a concrete PDF backend. All page methods take a
/// zero-based page index; failures should be reported through the page-local
/// error variants ([`PageRead`](crate::Error::PageRead),
/// [`Render`](crate::Error::Render), [`Decode`](crate::Error::Decode)) so the
/// pipeline can degrade gracefully.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Creator string from the document metadata, if present.
    fn creator(&self) -> Option<String>;

    /// Page dimensions in points (width, height).
    fn page_size(&self, page: usize) -> Result<(f32, f32)>;

    /// Number of selectable text characters on the page.
    fn text_char_count(&self, page: usize) -> Result<u64>;

    /// Vector drawing primitive counts for the page.
    fn vector_counts(&self, page: usize) -> Result<VectorCounts>;

    /// Embedded raster image objects placed on the page.
    fn image_objects(&self, page: usize) -> Result<Vec<ImageObject>>;

    /// Rasterize the full page with the given parameters.
    fn render_page(&self, page: usize, params: &RenderParams) -> Result<RasterImage>;

    /// Decode an embedded image object to raw pixel data.
    fn decode_image(&self, page: usize, object: &ImageObject) -> Result<RasterImage>;
}
