//! Trait definition for the metadata service backend.
//!
//! The orchestrator only ever talks to a [`MetadataProvider`], so the
//! ranking and availability pipelines can run against the real HTTP
//! client ([`crate::tmdb::TmdbClient`]) or an in-memory double in tests.

use std::future::Future;

use crate::error::ScoutError;
use crate::types::{Availability, Candidate, Category, TimeWindow, TitleDetails};

/// A source of movie/TV metadata and streaming availability.
///
/// All implementations must be `Send + Sync` so that category searches and
/// per-item availability lookups can run concurrently.
pub trait MetadataProvider: Send + Sync {
    /// Search one category and return the page's records, each tagged
    /// with `category` and without a relevance score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError`] if the request fails or the response has no
    /// `results` container.
    fn search_category(
        &self,
        category: Category,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Candidate>, ScoutError>> + Send;

    /// Fetch region-keyed streaming availability for one item.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError`] if the request fails or the body is malformed.
    fn availability(
        &self,
        item_id: u64,
        category: Category,
    ) -> impl Future<Output = Result<Availability, ScoutError>> + Send;

    /// Fetch the trending list for `window`, in service order.
    ///
    /// Only the first `limit` records of the listing are considered; of
    /// those, records that are neither movies nor TV shows (people) are
    /// dropped, so fewer than `limit` candidates may come back.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError`] if the request fails or the body is malformed.
    fn trending(
        &self,
        window: TimeWindow,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Candidate>, ScoutError>> + Send;

    /// Fetch the detail record for one item.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError`] if the request fails or the body is malformed.
    fn details(
        &self,
        item_id: u64,
        category: Category,
    ) -> impl Future<Output = Result<TitleDetails, ScoutError>> + Send;
}
