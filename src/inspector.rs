//! Per-page content statistics.
//!
//! [`PageInspector`] reads the low-level numbers the classifier aggregates:
//! selectable text characters, embedded raster objects, and vector drawing
//! primitives. Stats are computed once per page during classification and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::source::{DocumentSource, VectorCounts};

/// Immutable content statistics for a single page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageStats {
    /// Zero-based page index
    pub page_index: usize,
    /// Number of selectable text characters
    pub text_char_count: u64,
    /// Number of embedded raster image objects
    pub image_object_count: u64,
    /// Vector primitive counts (lines, curves, rects)
    pub vector: VectorCounts,
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
}

impl PageStats {
    /// Combined vector primitive count for the page.
    pub fn vector_primitive_count(&self) -> u64 {
        self.vector.total()
    }
}

/// Reads content statistics for one page at a time.
///
/// No side effects; deterministic given the same page content. Read failures
/// are propagated as [`Error::PageRead`] and not retried.
pub struct PageInspector;

impl PageInspector {
    /// Inspect a page and produce its statistics.
    pub fn inspect<D: DocumentSource + ?Sized>(doc: &D, page: usize) -> Result<PageStats> {
        let (page_width, page_height) = doc.page_size(page)?;
        let text_char_count = doc.text_char_count(page)?;
        let vector = doc.vector_counts(page)?;
        let images = doc.image_objects(page)?;

        if page_width <= 0.0 || page_height <= 0.0 {
            return Err(Error::PageRead {
                page,
                reason: format!("non-positive page size {}x{}", page_width, page_height),
            });
        }

        Ok(PageStats {
            page_index: page,
            text_char_count,
            image_object_count: images.len() as u64,
            vector,
            page_width,
            page_height,
        })
    }
}
