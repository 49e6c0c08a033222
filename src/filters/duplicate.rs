//! Duplicate candidate removal.
//!
//! The same embedded object frequently appears multiple times in digitally
//! composed documents (repeated logos, headers). Candidates with identical
//! dimensions and identical pixel-content digests are duplicates; only the
//! first occurrence, in document order, is kept. The comparison is
//! document-global, not per page.

use std::collections::HashSet;

use crate::strategy::Candidate;

/// Content identity key: dimensions plus pixel digest.
type ContentKey = (u32, u32, [u8; 16]);

/// Removes pixel-identical candidates, keeping the first occurrence.
pub struct DuplicateFilter;

impl DuplicateFilter {
    /// Filter duplicates out of an ordered candidate sequence.
    ///
    /// Stable: survivors keep their first-seen order. Idempotent: a second
    /// pass over the output removes nothing.
    pub fn dedupe(candidates: Vec<Candidate>) -> Vec<Candidate> {
        let mut seen: HashSet<ContentKey> = HashSet::with_capacity(candidates.len());
        let before = candidates.len();

        let kept: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| seen.insert((c.width(), c.height(), c.image.content_digest())))
            .collect();

        if kept.len() < before {
            log::debug!("Duplicate filter dropped {} of {} candidates", before - kept.len(), before);
        }
        kept
    }
}
