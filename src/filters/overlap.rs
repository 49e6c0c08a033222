//! Spatial containment filtering.
//!
//! Removes candidates whose rectangle is substantially contained within a
//! larger candidate on the same page, e.g. a watermark rectangle that is a
//! fragment of an already-captured page render. Candidates on different
//! pages never compete.
//!
//! Candidates are evaluated in descending rectangle-area order, so the
//! largest candidate on a page is adjudicated first and can never be dropped
//! by a smaller one. A candidate is dropped when its overlap ratio against
//! any already-retained (larger or equal) candidate reaches the threshold,
//! where the ratio is intersection area divided by the smaller rectangle's
//! area.

use std::collections::BTreeMap;

use crate::strategy::Candidate;

/// Removes candidates spatially contained in larger ones on the same page.
pub struct OverlapFilter;

impl OverlapFilter {
    /// Filter contained candidates out of an ordered sequence.
    ///
    /// `threshold` is the overlap ratio in [0, 1] at or above which the
    /// smaller candidate is considered contained. Survivors keep their
    /// original order.
    pub fn filter_overlaps(candidates: Vec<Candidate>, threshold: f32) -> Vec<Candidate> {
        if candidates.len() < 2 {
            return candidates;
        }

        // Group candidate positions by page; adjudication is per page only.
        let mut by_page: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, c) in candidates.iter().enumerate() {
            by_page.entry(c.page_index).or_default().push(i);
        }

        let mut dropped = vec![false; candidates.len()];
        for indices in by_page.values() {
            Self::adjudicate_page(&candidates, indices, threshold, &mut dropped);
        }

        let before = candidates.len();
        let kept: Vec<Candidate> = candidates
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !dropped[*i])
            .map(|(_, c)| c)
            .collect();

        if kept.len() < before {
            log::debug!("Overlap filter dropped {} of {} candidates", before - kept.len(), before);
        }
        kept
    }

    /// Greedy largest-first adjudication for one page's candidates.
    fn adjudicate_page(
        candidates: &[Candidate],
        indices: &[usize],
        threshold: f32,
        dropped: &mut [bool],
    ) {
        // Descending area; stable sort keeps discovery order for equal areas
        let mut ordered = indices.to_vec();
        ordered.sort_by(|&a, &b| {
            candidates[b]
                .rect
                .area()
                .total_cmp(&candidates[a].rect.area())
        });

        let mut retained: Vec<usize> = Vec::new();
        for &i in &ordered {
            let contained = retained.iter().any(|&kept| {
                candidates[kept].rect.overlap_ratio(&candidates[i].rect) >= threshold
            });
            if contained {
                dropped[i] = true;
            } else {
                retained.push(i);
            }
        }
    }
}
