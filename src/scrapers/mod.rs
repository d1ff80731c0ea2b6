//! Scrapers turning raw site markup into [`Program`](crate::models::Program)
//! lists.
//!
//! There is a single source, the NPO homepage, handled by [`npo`]. The
//! module follows a two-phase pattern:
//!
//! 1. **Fetching**: download the homepage markup
//! 2. **Extraction**: walk anchor elements and normalize them into programs
//!
//! Description extraction is a pluggable capability
//! ([`npo::DescriptionClassifier`]) so the fragile class-token heuristic can
//! be swapped without touching orchestration. Fetch failures and empty
//! extractions never propagate: both resolve to the fallback seed catalog.

pub mod npo;
