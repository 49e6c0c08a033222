//! Post-extraction candidate filters.
//!
//! Two filters run in fixed order: duplicates first, then spatial
//! containment. Deduplicating first shrinks the candidate set the quadratic
//! overlap comparison has to process.

mod duplicate;
mod overlap;

pub use duplicate::DuplicateFilter;
pub use overlap::OverlapFilter;
