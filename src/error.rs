//! Error types for the extraction pipeline.
//!
//! Only document-level and option-validation failures are fatal. Per-page
//! failures (unreadable content, failed renders, undecodable image objects)
//! degrade gracefully: the page contributes zero candidates and a warning
//! string in the final [`PipelineResult`](crate::pipeline::PipelineResult).

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during classification and extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document has zero pages. Fatal, raised before any extraction.
    #[error("Document has no pages")]
    EmptyDocument,

    /// A page's content could not be parsed. Recovered per page.
    #[error("Failed to read page {page}: {reason}")]
    PageRead {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the PDF collaborator
        reason: String,
    },

    /// A full-page rasterization failed. Recovered per page.
    #[error("Failed to render page {page}: {reason}")]
    Render {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the PDF collaborator
        reason: String,
    },

    /// An embedded image object could not be decoded. Recovered per page.
    #[error("Failed to decode image object on page {page}: {reason}")]
    Decode {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the PDF collaborator
        reason: String,
    },

    /// An extraction option failed validation. Fatal, rejected before any
    /// page processing begins.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Image encoding error from the save conveniences.
    #[error("Image error: {0}")]
    Image(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is recovered locally by the pipeline (the page
    /// contributes a warning instead of aborting the extraction).
    pub fn is_page_local(&self) -> bool {
        matches!(
            self,
            Error::PageRead { .. } | Error::Render { .. } | Error::Decode { .. }
        )
    }
}
