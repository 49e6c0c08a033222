//! Embedded image-object extraction strategy.
//!
//! Used for digitally composed documents: enumerates the raster objects
//! placed on a page and decodes each one directly, which preserves the
//! original pixel data instead of re-rasterizing the page around it.
//!
//! Objects smaller than the configured minimum pixel dimension are discarded
//! at emission time, before the duplicate/overlap filters run. Placement
//! rectangles are validated against the page bounds: fully out-of-bounds
//! objects are dropped with a warning, partially out-of-bounds ones are
//! clamped to the page.

use crate::geometry::Rect;
use crate::source::DocumentSource;
use crate::strategy::{Candidate, ExtractionMethod, ExtractionStrategy};

/// Default minimum width/height in pixels for emitted objects.
pub const DEFAULT_MIN_SIZE: u32 = 100;

/// Image-object extraction strategy.
#[derive(Debug, Clone)]
pub struct ImageObjectExtraction {
    min_size: u32,
}

impl Default for ImageObjectExtraction {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SIZE)
    }
}

impl ImageObjectExtraction {
    /// Create a strategy discarding objects below `min_size` pixels in
    /// either dimension.
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }

    /// The minimum pixel dimension in effect.
    pub fn min_size(&self) -> u32 {
        self.min_size
    }
}

impl ExtractionStrategy for ImageObjectExtraction {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::ImageObjectExtraction
    }

    fn extract_page(
        &self,
        doc: &dyn DocumentSource,
        page: usize,
        warnings: &mut Vec<String>,
    ) -> Vec<Candidate> {
        let page_bounds = match doc.page_size(page) {
            Ok((w, h)) => Rect::new(0.0, 0.0, w, h),
            Err(e) => {
                log::warn!("Skipping page {}: {}", page, e);
                warnings.push(format!("page {}: {}", page + 1, e));
                return Vec::new();
            },
        };

        let objects = match doc.image_objects(page) {
            Ok(objects) => objects,
            Err(e) => {
                log::warn!("Image enumeration failed on page {}: {}", page, e);
                warnings.push(format!("page {}: {}", page + 1, e));
                return Vec::new();
            },
        };

        let mut candidates = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            if object.width < self.min_size || object.height < self.min_size {
                log::debug!(
                    "Discarding {}x{} object on page {} (below {} px minimum)",
                    object.width,
                    object.height,
                    page,
                    self.min_size
                );
                continue;
            }

            let rect = match page_bounds.intersection(&object.rect) {
                Some(clamped) => clamped,
                None => {
                    warnings.push(format!(
                        "page {}: image {} placed outside page bounds, skipped",
                        page + 1,
                        i + 1
                    ));
                    continue;
                },
            };

            match doc.decode_image(page, object) {
                Ok(image) => candidates.push(Candidate {
                    page_index: page,
                    rect,
                    image,
                    method: ExtractionMethod::ImageObjectExtraction,
                }),
                Err(e) => {
                    log::warn!("Decode failed for image {} on page {}: {}", i + 1, page, e);
                    warnings.push(format!("page {}: {}", page + 1, e));
                },
            }
        }

        candidates
    }
}
