//! Configuration for the extraction pipeline.

use crate::error::{Error, Result};
use crate::strategy::ExtractionMethod;

/// Options recognized by [`ExtractionPipeline`](crate::pipeline::ExtractionPipeline).
///
/// Validated once, before any page processing begins; out-of-range values
/// are rejected with [`Error::InvalidOption`].
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    /// Minimum width/height in pixels for image-object emission.
    ///
    /// Default: 100.
    pub min_size: u32,

    /// Enable the document-global duplicate filter.
    ///
    /// Default: true.
    pub filter_duplicates: bool,

    /// Enable the per-page containment (overlap) filter.
    ///
    /// Default: true.
    pub filter_contained: bool,

    /// Overlap ratio in [0, 1] at or above which a smaller candidate is
    /// dropped as contained.
    ///
    /// Default: 0.8.
    pub overlap_threshold: f32,

    /// Force an extraction method irrespective of the assigned category.
    ///
    /// Escape hatch for documents the classifier mis-detects.
    /// Default: None (category decides).
    pub force_mode: Option<ExtractionMethod>,

    /// Full-page render resolution in pixels per page-inch.
    ///
    /// Default: 300. Escalated to at least 600 automatically when the CAD
    /// override is set.
    pub dpi: u32,

    /// Exclude text-only documents entirely: when the document classifies
    /// as Text and contains zero images, no candidates are emitted.
    ///
    /// Default: false.
    pub filter_text_only: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            min_size: 100,
            filter_duplicates: true,
            filter_contained: true,
            overlap_threshold: 0.8,
            force_mode: None,
            dpi: 300,
            filter_text_only: false,
        }
    }
}

impl ExtractionOptions {
    /// Validate option values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.overlap_threshold) || self.overlap_threshold.is_nan() {
            return Err(Error::InvalidOption(format!(
                "overlap_threshold must be in [0, 1], got {}",
                self.overlap_threshold
            )));
        }
        if self.dpi == 0 {
            return Err(Error::InvalidOption("dpi must be positive".to_string()));
        }
        Ok(())
    }

    /// Set the minimum image-object dimension.
    pub fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Enable or disable duplicate filtering.
    pub fn with_duplicate_filtering(mut self, enabled: bool) -> Self {
        self.filter_duplicates = enabled;
        self
    }

    /// Enable or disable containment filtering.
    pub fn with_contained_filtering(mut self, enabled: bool) -> Self {
        self.filter_contained = enabled;
        self
    }

    /// Set the overlap ratio threshold.
    pub fn with_overlap_threshold(mut self, threshold: f32) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    /// Force the extraction method.
    pub fn with_force_mode(mut self, method: ExtractionMethod) -> Self {
        self.force_mode = Some(method);
        self
    }

    /// Set the full-page render resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Enable or disable the text-only document exclusion.
    pub fn with_text_only_filtering(mut self, enabled: bool) -> Self {
        self.filter_text_only = enabled;
        self
    }
}
