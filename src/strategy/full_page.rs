//! Whole-page rasterization strategy.
//!
//! Used for vector and scanned documents, where the page itself is the
//! image. Produces exactly one candidate per page whose rectangle equals the
//! full page bounds. Under the CAD override the render parameters are
//! escalated: resolution is raised to at least 600 DPI, output is forced to
//! normalized RGB, and annotation layers are composited in, because CAD
//! drawings lose disjoint micro-strokes and annotation content under default
//! settings.

use crate::geometry::Rect;
use crate::source::{ColorModel, DocumentSource, RenderParams};
use crate::strategy::{Candidate, ExtractionMethod, ExtractionStrategy};

/// Render resolution floor applied under the CAD override.
pub const CAD_MIN_DPI: u32 = 600;

/// Full-page render strategy.
#[derive(Debug, Clone)]
pub struct FullPageRender {
    params: RenderParams,
}

impl FullPageRender {
    /// Create a strategy rendering at the given resolution.
    ///
    /// When `cad_override` is set the parameters are escalated; otherwise
    /// the backend's device color model is used and annotations are left
    /// out.
    pub fn new(dpi: u32, cad_override: bool) -> Self {
        let params = if cad_override {
            RenderParams {
                dpi: dpi.max(CAD_MIN_DPI),
                color: ColorModel::Rgb,
                include_annotations: true,
            }
        } else {
            RenderParams {
                dpi,
                color: ColorModel::Device,
                include_annotations: false,
            }
        };
        Self { params }
    }

    /// The render parameters in effect.
    pub fn params(&self) -> &RenderParams {
        &self.params
    }
}

impl ExtractionStrategy for FullPageRender {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::FullPageRender
    }

    fn extract_page(
        &self,
        doc: &dyn DocumentSource,
        page: usize,
        warnings: &mut Vec<String>,
    ) -> Vec<Candidate> {
        let (width, height) = match doc.page_size(page) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("Skipping page {}: {}", page, e);
                warnings.push(format!("page {}: {}", page + 1, e));
                return Vec::new();
            },
        };

        match doc.render_page(page, &self.params) {
            Ok(image) => {
                log::debug!(
                    "Rendered page {} at {} dpi ({}x{} px)",
                    page,
                    self.params.dpi,
                    image.width(),
                    image.height()
                );
                vec![Candidate {
                    page_index: page,
                    rect: Rect::new(0.0, 0.0, width, height),
                    image,
                    method: ExtractionMethod::FullPageRender,
                }]
            },
            Err(e) => {
                log::warn!("Render failed on page {}: {}", page, e);
                warnings.push(format!("page {}: {}", page + 1, e));
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let strategy = FullPageRender::new(300, false);
        assert_eq!(strategy.params().dpi, 300);
        assert_eq!(strategy.params().color, ColorModel::Device);
        assert!(!strategy.params().include_annotations);
    }

    #[test]
    fn test_cad_override_escalates() {
        let strategy = FullPageRender::new(300, true);
        assert_eq!(strategy.params().dpi, CAD_MIN_DPI);
        assert_eq!(strategy.params().color, ColorModel::Rgb);
        assert!(strategy.params().include_annotations);
    }

    #[test]
    fn test_cad_override_keeps_higher_dpi() {
        let strategy = FullPageRender::new(900, true);
        assert_eq!(strategy.params().dpi, 900);
    }
}
