//! Extraction strategies: category-appropriate ways to turn a page into
//! candidate images.
//!
//! Two strategies exist: whole-page rasterization for vector and scanned
//! documents, and direct image-object extraction for digitally composed
//! ones. Strategies never abort the document: a failing page yields zero
//! candidates and a warning, and the remaining pages proceed.

mod full_page;
mod image_objects;

pub use full_page::FullPageRender;
pub use image_objects::ImageObjectExtraction;

use serde::{Deserialize, Serialize};

use crate::classifier::{DocumentProfile, PdfCategory};
use crate::geometry::Rect;
use crate::raster::RasterImage;
use crate::source::DocumentSource;

/// How a candidate image was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Whole-page rasterization at a configured resolution
    FullPageRender,
    /// Direct decoding of embedded raster image objects
    ImageObjectExtraction,
}

/// An unfiltered extraction result awaiting duplicate/overlap adjudication.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Zero-based page index the candidate came from
    pub page_index: usize,
    /// Source rectangle on the page, in page coordinates
    pub rect: Rect,
    /// Decoded pixel data
    pub image: RasterImage,
    /// Strategy that produced this candidate
    pub method: ExtractionMethod,
}

impl Candidate {
    /// Pixel width of the candidate image.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height of the candidate image.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// A per-page extraction strategy.
///
/// Implementations recover from collaborator failures internally: errors are
/// reported through the `warnings` sink and the page contributes whatever
/// candidates could still be produced.
pub trait ExtractionStrategy {
    /// The method tag attached to produced candidates.
    fn method(&self) -> ExtractionMethod;

    /// Extract candidate images from one page.
    fn extract_page(
        &self,
        doc: &dyn DocumentSource,
        page: usize,
        warnings: &mut Vec<String>,
    ) -> Vec<Candidate>;
}

/// Resolve the effective extraction method for a classified document.
///
/// `force_mode` overrides the category-driven choice entirely; it exists
/// because automatic classification can mis-detect edge cases. Text
/// documents use image-object extraction when they contain embedded images
/// and fall back to whole-page rendering otherwise.
pub fn resolve_method(
    profile: &DocumentProfile,
    force_mode: Option<ExtractionMethod>,
) -> ExtractionMethod {
    if let Some(forced) = force_mode {
        log::debug!("Extraction method forced to {:?}", forced);
        return forced;
    }

    match profile.category {
        PdfCategory::Vector | PdfCategory::Scanned => ExtractionMethod::FullPageRender,
        PdfCategory::Digital => ExtractionMethod::ImageObjectExtraction,
        PdfCategory::Text => {
            if profile.total_images > 0 {
                ExtractionMethod::ImageObjectExtraction
            } else {
                ExtractionMethod::FullPageRender
            }
        },
    }
}
