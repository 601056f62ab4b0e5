//! Search orchestrator: ranking, availability policy, brand dedup.
//!
//! This module fans out the movie and TV searches concurrently, scores and
//! ranks the merged candidates, and reduces per-item streaming availability
//! to a short, brand-deduplicated list of subscription offers.

pub mod availability;
pub mod dedup;
pub mod scoring;
pub mod search;
