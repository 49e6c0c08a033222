//! Property-based tests for classification and filtering invariants.

mod common;

use common::{MemoryDocument, MemoryImage, MemoryPage};
use pdf_harvest::classifier::DocumentClassifier;
use pdf_harvest::filters::{DuplicateFilter, OverlapFilter};
use pdf_harvest::geometry::Rect;
use pdf_harvest::raster::{PixelFormat, RasterImage};
use pdf_harvest::strategy::{Candidate, ExtractionMethod, ExtractionStrategy, ImageObjectExtraction};
use proptest::prelude::*;

/// A small solid-gray candidate; equal (width, height, fill) triples
/// produce equal content digests.
fn candidate(page_index: usize, rect: Rect, width: u32, height: u32, fill: u8) -> Candidate {
    let pixels = vec![fill; width as usize * height as usize];
    Candidate {
        page_index,
        rect,
        image: RasterImage::new(width, height, PixelFormat::Gray8, pixels).unwrap(),
        method: ExtractionMethod::ImageObjectExtraction,
    }
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0.0f32..500.0, 0.0f32..500.0, 1.0f32..300.0, 1.0f32..300.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (0usize..4, arb_rect(), 1u32..6, 1u32..6, 0u8..4)
        .prop_map(|(page, rect, w, h, fill)| candidate(page, rect, w, h, fill))
}

proptest! {
    /// Document totals are exactly the sums of the per-page statistics.
    #[test]
    fn prop_profile_totals_are_page_sums(
        pages in prop::collection::vec((0u64..5_000, 0u64..2_000, 0usize..4), 1..12)
    ) {
        let mem_pages: Vec<MemoryPage> = pages
            .iter()
            .map(|&(text, lines, image_count)| {
                let mut page = MemoryPage::letter().with_text(text).with_lines(lines);
                for i in 0..image_count {
                    page = page.with_image(MemoryImage::new(
                        Rect::new(i as f32 * 10.0, 0.0, 50.0, 50.0),
                        100,
                        100,
                        i as u8,
                    ));
                }
                page
            })
            .collect();
        let doc = MemoryDocument::new(mem_pages);

        let profile = DocumentClassifier::default().classify_source(&doc).unwrap();

        let text_sum: u64 = pages.iter().map(|p| p.0).sum();
        let vector_sum: u64 = pages.iter().map(|p| p.1).sum();
        let image_sum: u64 = pages.iter().map(|p| p.2 as u64).sum();
        prop_assert_eq!(profile.total_text_chars, text_sum);
        prop_assert_eq!(profile.total_vector_objects, vector_sum);
        prop_assert_eq!(profile.total_images, image_sum);
        prop_assert_eq!(profile.pages.len(), pages.len());
    }

    /// Ten thousand or more vector primitives always set the CAD override,
    /// whatever the creator metadata says.
    #[test]
    fn prop_heavy_vector_documents_get_cad_override(
        extra in 0u64..50_000,
        creator in prop::option::of("[a-zA-Z ]{0,20}")
    ) {
        let mut doc =
            MemoryDocument::new(vec![MemoryPage::letter().with_lines(10_000 + extra)]);
        doc.creator = creator;

        let profile = DocumentClassifier::default().classify_source(&doc).unwrap();
        prop_assert!(profile.is_cad_override);
    }

    /// Deduplication is idempotent and never reorders survivors.
    #[test]
    fn prop_dedupe_is_idempotent(candidates in prop::collection::vec(arb_candidate(), 0..20)) {
        let once = DuplicateFilter::dedupe(candidates);
        let keys: Vec<_> = once
            .iter()
            .map(|c| (c.page_index, c.width(), c.height(), c.image.content_digest()))
            .collect();

        let twice = DuplicateFilter::dedupe(once);
        let keys_again: Vec<_> = twice
            .iter()
            .map(|c| (c.page_index, c.width(), c.height(), c.image.content_digest()))
            .collect();

        prop_assert_eq!(keys, keys_again);
    }

    /// After overlap filtering, no two survivors on the same page overlap
    /// at or above the threshold.
    #[test]
    fn prop_no_surviving_pair_overlaps(
        candidates in prop::collection::vec(arb_candidate(), 0..20),
        threshold in 0.1f32..1.0
    ) {
        let kept = OverlapFilter::filter_overlaps(candidates, threshold);
        for (i, a) in kept.iter().enumerate() {
            for b in kept.iter().skip(i + 1) {
                if a.page_index == b.page_index {
                    prop_assert!(a.rect.overlap_ratio(&b.rect) < threshold);
                }
            }
        }
    }

    /// Raising the minimum size can only shrink the candidate set.
    #[test]
    fn prop_min_size_is_monotone(
        dims in prop::collection::vec((1u32..400, 1u32..400), 0..10),
        low in 1u32..200,
        delta in 0u32..200
    ) {
        let mut page = MemoryPage::letter().with_text(1_000);
        for (i, &(w, h)) in dims.iter().enumerate() {
            page = page.with_image(MemoryImage::new(
                Rect::new(i as f32 * 5.0, 0.0, 40.0, 40.0),
                w,
                h,
                i as u8,
            ));
        }
        let doc = MemoryDocument::new(vec![page]);

        let mut warnings = Vec::new();
        let loose = ImageObjectExtraction::new(low).extract_page(&doc, 0, &mut warnings);
        let strict =
            ImageObjectExtraction::new(low + delta).extract_page(&doc, 0, &mut warnings);
        prop_assert!(strict.len() <= loose.len());
    }
}
