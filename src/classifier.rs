//! Document-level structural classification.
//!
//! Aggregates per-page [`PageStats`] into a [`DocumentProfile`] and assigns
//! one of four categories, with an independent CAD override that escalates
//! rendering parameters for vector documents produced by CAD tools.
//!
//! Category decision, first match wins:
//! 1. **Scanned** - near-zero selectable text and at least one embedded
//!    raster per page on average
//! 2. **Vector** - vector primitives dominate text and images combined
//! 3. **Digital** - mixed text and embedded images
//! 4. **Text** - default (text-dominated, few or no images)

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inspector::{PageInspector, PageStats};
use crate::source::DocumentSource;

/// Structural category of a PDF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfCategory {
    /// Dominated by drawing primitives (lines/curves/rects); typical of
    /// CAD or vector-graphics exports. Extracted by full-page rendering.
    Vector,

    /// Effectively one full-page raster per page with little or no
    /// selectable text. Extracted by full-page rendering.
    Scanned,

    /// Mixed selectable text and embedded raster images in comparable
    /// proportion. Extracted by direct image-object extraction.
    Digital,

    /// Text-dominated with few or no images. Default category.
    Text,
}

/// Tunable thresholds for the category decision.
///
/// The source values are round, empirically chosen constants; they are
/// configuration defaults here, not derived formulas.
#[derive(Debug, Clone)]
pub struct ClassifierThresholds {
    /// Maximum total text characters for the Scanned category
    /// (near-zero selectable text). Default: 100.
    pub scanned_text_max: u64,

    /// Vector dominance multiplier: the document is Vector when the total
    /// vector primitive count exceeds this factor times the combined text
    /// and image totals. Default: 2.0.
    pub vector_dominance: f32,

    /// Absolute vector primitive count that triggers the CAD override
    /// regardless of creator metadata. Default: 10_000.
    pub cad_vector_min: u64,

    /// Case-insensitive creator-metadata substrings identifying
    /// CAD-authoring tools.
    pub cad_creator_signatures: Vec<String>,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            scanned_text_max: 100,
            vector_dominance: 2.0,
            cad_vector_min: 10_000,
            cad_creator_signatures: [
                "autocad",
                "dwg",
                "microstation",
                "solidworks",
                "catia",
                "revit",
                "draftsight",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ClassifierThresholds {
    /// Set the Scanned-category text ceiling.
    pub fn with_scanned_text_max(mut self, max: u64) -> Self {
        self.scanned_text_max = max;
        self
    }

    /// Set the vector dominance multiplier.
    pub fn with_vector_dominance(mut self, factor: f32) -> Self {
        self.vector_dominance = factor;
        self
    }

    /// Set the absolute vector count for the CAD override.
    pub fn with_cad_vector_min(mut self, min: u64) -> Self {
        self.cad_vector_min = min;
        self
    }

    /// Add a creator-metadata signature to the CAD table.
    pub fn with_cad_creator_signature(mut self, signature: impl Into<String>) -> Self {
        self.cad_creator_signatures.push(signature.into());
        self
    }
}

/// Aggregated document profile produced by classification.
///
/// Derived entirely from the per-page stats plus document metadata; computed
/// exactly once per document and consumed read-only downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentProfile {
    /// Number of pages in the document
    pub page_count: usize,
    /// Creator string from document metadata, if present
    pub creator: Option<String>,
    /// Per-page statistics the aggregates were computed from
    pub pages: Vec<PageStats>,
    /// Sum of text characters across all pages
    pub total_text_chars: u64,
    /// Sum of embedded image objects across all pages
    pub total_images: u64,
    /// Sum of vector primitives across all pages
    pub total_vector_objects: u64,
    /// Assigned structural category
    pub category: PdfCategory,
    /// CAD escalation flag; forces enhanced rendering parameters
    pub is_cad_override: bool,
}

/// Classifies a document from its per-page statistics.
pub struct DocumentClassifier {
    thresholds: ClassifierThresholds,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new(ClassifierThresholds::default())
    }
}

impl DocumentClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds in effect.
    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classify a document from pre-computed page statistics.
    ///
    /// Aggregation is a pure sum over the page stats; the category decision
    /// is applied in fixed precedence order. Fails with
    /// [`Error::EmptyDocument`] when `pages` is empty.
    pub fn classify(
        &self,
        pages: Vec<PageStats>,
        creator: Option<String>,
    ) -> Result<DocumentProfile> {
        if pages.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let total_text_chars: u64 = pages.iter().map(|p| p.text_char_count).sum();
        let total_images: u64 = pages.iter().map(|p| p.image_object_count).sum();
        let total_vector_objects: u64 = pages.iter().map(|p| p.vector_primitive_count()).sum();
        let page_count = pages.len();

        let category = self.decide_category(
            total_text_chars,
            total_images,
            total_vector_objects,
            page_count,
        );

        let is_cad_override = self.is_cad_creator(creator.as_deref())
            || total_vector_objects >= self.thresholds.cad_vector_min;

        log::debug!(
            "Classified {} pages as {:?} (text={}, images={}, vectors={}, cad_override={})",
            page_count,
            category,
            total_text_chars,
            total_images,
            total_vector_objects,
            is_cad_override
        );

        Ok(DocumentProfile {
            page_count,
            creator,
            pages,
            total_text_chars,
            total_images,
            total_vector_objects,
            category,
            is_cad_override,
        })
    }

    /// Inspect every page of a document and classify it.
    ///
    /// This is the classify-only entry point used by "analyze without
    /// extracting" callers. Unreadable pages are skipped with a logged
    /// warning; only a zero-page document is fatal.
    pub fn classify_source<D: DocumentSource + ?Sized>(&self, doc: &D) -> Result<DocumentProfile> {
        let mut warnings = Vec::new();
        self.classify_source_with_warnings(doc, &mut warnings)
    }

    /// Like [`classify_source`](Self::classify_source), collecting per-page
    /// warnings into the given sink.
    pub fn classify_source_with_warnings<D: DocumentSource + ?Sized>(
        &self,
        doc: &D,
        warnings: &mut Vec<String>,
    ) -> Result<DocumentProfile> {
        let page_count = doc.page_count();
        if page_count == 0 {
            return Err(Error::EmptyDocument);
        }

        let mut pages = Vec::with_capacity(page_count);
        for page in 0..page_count {
            match PageInspector::inspect(doc, page) {
                Ok(stats) => pages.push(stats),
                Err(e) if e.is_page_local() => {
                    log::warn!("Skipping unreadable page {} during classification: {}", page, e);
                    warnings.push(format!("page {}: {}", page + 1, e));
                },
                Err(e) => return Err(e),
            }
        }

        if pages.is_empty() {
            // Every page was unreadable. Nothing to aggregate, so fall
            // through to the default category; strategies will surface
            // the same per-page failures again during extraction.
            let creator = doc.creator();
            let is_cad_override = self.is_cad_creator(creator.as_deref());
            return Ok(DocumentProfile {
                page_count,
                creator,
                pages,
                total_text_chars: 0,
                total_images: 0,
                total_vector_objects: 0,
                category: PdfCategory::Text,
                is_cad_override,
            });
        }

        let mut profile = self.classify(pages, doc.creator())?;
        // Skipped pages still count toward the document size.
        profile.page_count = page_count;
        Ok(profile)
    }

    fn decide_category(
        &self,
        total_text: u64,
        total_images: u64,
        total_vectors: u64,
        page_count: usize,
    ) -> PdfCategory {
        // Scanned: near-zero selectable text, one embedded raster per page
        // on average
        if total_text < self.thresholds.scanned_text_max && total_images >= page_count as u64 {
            return PdfCategory::Scanned;
        }

        // Vector: primitive-dominated relative to text and images combined
        let combined = (total_text + total_images) as f32;
        if total_vectors > 0 && total_vectors as f32 > self.thresholds.vector_dominance * combined {
            return PdfCategory::Vector;
        }

        // Digital: mixed text and images
        if total_images > 0 && total_text > 0 {
            return PdfCategory::Digital;
        }

        PdfCategory::Text
    }

    fn is_cad_creator(&self, creator: Option<&str>) -> bool {
        let Some(creator) = creator else {
            return false;
        };
        let lowered = creator.to_lowercase();
        self.thresholds
            .cad_creator_signatures
            .iter()
            .any(|sig| lowered.contains(sig.as_str()))
    }
}
