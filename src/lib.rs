//! # PDF Harvest
//!
//! Classify a PDF's structure and harvest its images with the method that
//! fits: full-page rendering for vector drawings and scans, direct
//! image-object extraction for digitally composed documents.
//!
//! ## Pipeline
//!
//! 1. **Inspect** every page: text characters, embedded raster objects,
//!    vector drawing primitives.
//! 2. **Classify** the document as Vector, Scanned, Digital, or Text, with
//!    a CAD override that escalates render parameters for CAD-authored
//!    drawings (creator metadata match or an extreme vector count).
//! 3. **Extract** candidate images with the category-appropriate strategy.
//! 4. **Filter** pixel-identical duplicates, then spatially contained
//!    candidates (overlap-ratio containment).
//!
//! PDF parsing itself is delegated to an external backend through the
//! [`source::DocumentSource`] trait; this crate decides *how* to extract
//! and *which* results are worth keeping.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_harvest::{ExtractionOptions, ExtractionPipeline};
//!
//! # fn run(doc: &dyn pdf_harvest::source::DocumentSource) -> pdf_harvest::Result<()> {
//! let pipeline = ExtractionPipeline::new(ExtractionOptions::default())?;
//! let result = pipeline.extract(doc)?;
//!
//! println!("category: {:?}", result.profile.category);
//! for image in &result.kept_images {
//!     println!("page {}: {}x{} via {:?}",
//!         image.page_index, image.width, image.height, image.method);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of Apache License, Version 2.0 or MIT license at
//! your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric primitives
pub mod geometry;

// The PDF-backend collaborator seam
pub mod source;

// Raw image buffers
pub mod raster;

// Per-page statistics
pub mod inspector;

// Document classification
pub mod classifier;

// Extraction strategies
pub mod strategy;

// Candidate filtering
pub mod filters;

// Orchestration
pub mod pipeline;

// Re-exports
pub use classifier::{ClassifierThresholds, DocumentClassifier, DocumentProfile, PdfCategory};
pub use error::{Error, Result};
pub use inspector::{PageInspector, PageStats};
pub use pipeline::{ExtractionOptions, ExtractionPipeline, KeptImage, PipelineResult};
pub use raster::{PixelFormat, RasterImage};
pub use strategy::{Candidate, ExtractionMethod};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
