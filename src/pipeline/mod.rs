//! The classify-then-extract-then-filter pipeline.
//!
//! Orchestration order is fixed: inspect every page, classify the document,
//! resolve the extraction strategy (category or `force_mode`), extract
//! candidates per page, run the duplicate filter, then the overlap filter,
//! and assign stable result indices. Per-page failures surface as warnings
//! in the result; only an empty document or invalid options abort the call.

pub mod config;

pub use config::ExtractionOptions;

use std::collections::HashSet;

use serde::Serialize;

use crate::classifier::{ClassifierThresholds, DocumentClassifier, DocumentProfile, PdfCategory};
use crate::error::Result;
use crate::filters::{DuplicateFilter, OverlapFilter};
use crate::geometry::Rect;
use crate::raster::RasterImage;
use crate::source::DocumentSource;
use crate::strategy::{
    resolve_method, Candidate, ExtractionMethod, ExtractionStrategy, FullPageRender,
    ImageObjectExtraction,
};

/// A candidate that survived both filters.
///
/// Carries a stable index within the final result, ordered by
/// (page index, discovery order).
#[derive(Debug, Clone, Serialize)]
pub struct KeptImage {
    /// Stable index within the result
    pub index: usize,
    /// Zero-based page index the image came from
    pub page_index: usize,
    /// Source rectangle on the page, in page coordinates
    pub rect: Rect,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Strategy that produced the image
    pub method: ExtractionMethod,
    /// Raw pixel data (not serialized)
    #[serde(skip)]
    pub image: RasterImage,
}

/// The outcome of a pipeline run.
///
/// A partially failed run is still a success: unreadable pages contribute
/// warnings instead of images, and `kept_images` covers the pages that
/// succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Classification profile computed for the document
    pub profile: DocumentProfile,
    /// Surviving images, ordered by (page index, discovery order)
    pub kept_images: Vec<KeptImage>,
    /// Non-fatal per-page warnings, in the order they occurred
    pub warnings: Vec<String>,
}

/// Orchestrates classification, extraction, and filtering for one document.
pub struct ExtractionPipeline {
    options: ExtractionOptions,
    classifier: DocumentClassifier,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        // Default options always validate
        Self {
            options: ExtractionOptions::default(),
            classifier: DocumentClassifier::default(),
        }
    }
}

impl ExtractionPipeline {
    /// Create a pipeline with the given options.
    ///
    /// Options are validated here, before any document is touched.
    pub fn new(options: ExtractionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            classifier: DocumentClassifier::default(),
        })
    }

    /// Create a pipeline with custom classifier thresholds.
    pub fn with_thresholds(
        options: ExtractionOptions,
        thresholds: ClassifierThresholds,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            classifier: DocumentClassifier::new(thresholds),
        })
    }

    /// The options in effect.
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Classify the document without extracting anything.
    ///
    /// The "analyze without extracting" mode: returns the profile the full
    /// run would have used for strategy selection.
    pub fn classify(&self, doc: &dyn DocumentSource) -> Result<DocumentProfile> {
        self.classifier.classify_source(doc)
    }

    /// Run the full pipeline over a document.
    pub fn extract(&self, doc: &dyn DocumentSource) -> Result<PipelineResult> {
        let mut warnings = Vec::new();
        let profile = self
            .classifier
            .classify_source_with_warnings(doc, &mut warnings)?;

        // Text-only exclusion: the caller asked for "only pages with
        // pictures", and this document has none.
        if self.options.filter_text_only
            && profile.category == PdfCategory::Text
            && profile.total_images == 0
        {
            log::info!("Text-only document excluded from extraction");
            return Ok(PipelineResult {
                profile,
                kept_images: Vec::new(),
                warnings,
            });
        }

        let method = resolve_method(&profile, self.options.force_mode);
        log::info!(
            "Extracting {:?} document with {:?} ({} pages)",
            profile.category,
            method,
            profile.page_count
        );

        let mut candidates = self.run_strategy(doc, &profile, method, &mut warnings);

        // Retry once with the alternate method when the primary came up
        // empty; classification can be wrong about where the images live.
        if candidates.is_empty() && !self.options.filter_text_only {
            let alternate = match method {
                ExtractionMethod::FullPageRender => ExtractionMethod::ImageObjectExtraction,
                ExtractionMethod::ImageObjectExtraction => ExtractionMethod::FullPageRender,
            };
            log::info!("No candidates from {:?}, retrying with {:?}", method, alternate);
            candidates = self.run_strategy(doc, &profile, alternate, &mut warnings);
        }

        if self.options.filter_duplicates {
            candidates = DuplicateFilter::dedupe(candidates);
        }
        if self.options.filter_contained {
            candidates =
                OverlapFilter::filter_overlaps(candidates, self.options.overlap_threshold);
        }

        // Candidates were accumulated page by page and both filters are
        // stable, so enumeration yields (page_index, discovery order).
        let kept_images: Vec<KeptImage> = candidates
            .into_iter()
            .enumerate()
            .map(|(index, c)| KeptImage {
                index,
                page_index: c.page_index,
                rect: c.rect,
                width: c.width(),
                height: c.height(),
                method: c.method,
                image: c.image,
            })
            .collect();

        log::info!(
            "Extraction finished: {} images kept, {} warnings",
            kept_images.len(),
            warnings.len()
        );

        Ok(PipelineResult {
            profile,
            kept_images,
            warnings,
        })
    }

    fn run_strategy(
        &self,
        doc: &dyn DocumentSource,
        profile: &DocumentProfile,
        method: ExtractionMethod,
        warnings: &mut Vec<String>,
    ) -> Vec<Candidate> {
        let strategy: Box<dyn ExtractionStrategy> = match method {
            ExtractionMethod::FullPageRender => Box::new(FullPageRender::new(
                self.options.dpi,
                profile.is_cad_override,
            )),
            ExtractionMethod::ImageObjectExtraction => {
                Box::new(ImageObjectExtraction::new(self.options.min_size))
            },
        };

        // Pages that failed inspection were already reported during
        // classification; re-reading them would only repeat the warning.
        let readable: HashSet<usize> = profile.pages.iter().map(|p| p.page_index).collect();

        let mut candidates = Vec::new();
        for page in 0..doc.page_count() {
            if !readable.contains(&page) {
                continue;
            }
            candidates.extend(strategy.extract_page(doc, page, warnings));
        }
        candidates
    }
}
