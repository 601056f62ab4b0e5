//! Shared test utilities used across multiple test modules.
//!
//! Provides an in-memory [`MetadataProvider`] with scripted responses and
//! call counters, plus builders for candidates and offer records.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ScoutError;
use crate::provider::MetadataProvider;
use crate::types::{
    Availability, Candidate, Category, OfferRecord, TimeWindow, TitleDetails,
};

/// Build a candidate with a poster and the given display title.
pub fn candidate(id: u64, title: &str, category: Category, popularity: f64) -> Candidate {
    let (title, name) = match category {
        Category::Movie => (Some(title.to_string()), None),
        Category::Tv => (None, Some(title.to_string())),
    };
    Candidate {
        id,
        title,
        name,
        poster_path: Some(format!("/poster{id}.jpg")),
        release_date: None,
        first_air_date: None,
        overview: None,
        vote_average: None,
        category,
        popularity,
        relevance_score: None,
    }
}

/// Build an offer record with a logo.
pub fn offer_record(provider_id: u64, name: &str) -> OfferRecord {
    OfferRecord {
        provider_id,
        provider_name: name.to_string(),
        logo_path: Some(format!("/logo{provider_id}.png")),
        display_priority: None,
    }
}

/// Scripted metadata provider.
///
/// - Unscripted category searches succeed with no results.
/// - Unscripted availability, trending and details lookups fail.
#[derive(Default)]
pub struct MockProvider {
    searches: HashMap<Category, Vec<Candidate>>,
    failing_searches: HashSet<Category>,
    availability: HashMap<u64, Availability>,
    fail_all_availability: bool,
    trending: Option<Vec<Candidate>>,
    search_calls: AtomicUsize,
    availability_calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, category: Category, results: Vec<Candidate>) -> Self {
        self.searches.insert(category, results);
        self
    }

    pub fn failing_search(mut self, category: Category) -> Self {
        self.failing_searches.insert(category);
        self
    }

    pub fn with_availability(mut self, item_id: u64, availability: Availability) -> Self {
        self.availability.insert(item_id, availability);
        self
    }

    pub fn failing_availability(mut self) -> Self {
        self.fail_all_availability = true;
        self
    }

    pub fn with_trending(mut self, items: Vec<Candidate>) -> Self {
        self.trending = Some(items);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn availability_calls(&self) -> usize {
        self.availability_calls.load(Ordering::SeqCst)
    }
}

impl MetadataProvider for MockProvider {
    async fn search_category(
        &self,
        category: Category,
        _query: &str,
        _page: u32,
    ) -> Result<Vec<Candidate>, ScoutError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_searches.contains(&category) {
            return Err(ScoutError::Http(format!("mock {category} search failure")));
        }
        Ok(self.searches.get(&category).cloned().unwrap_or_default())
    }

    async fn availability(
        &self,
        item_id: u64,
        _category: Category,
    ) -> Result<Availability, ScoutError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all_availability {
            return Err(ScoutError::Http("mock availability failure".into()));
        }
        self.availability
            .get(&item_id)
            .cloned()
            .ok_or_else(|| ScoutError::Http(format!("no availability scripted for {item_id}")))
    }

    async fn trending(
        &self,
        _window: TimeWindow,
        limit: usize,
    ) -> Result<Vec<Candidate>, ScoutError> {
        self.trending
            .clone()
            .map(|items| items.into_iter().take(limit).collect())
            .ok_or_else(|| ScoutError::Http("no trending scripted".into()))
    }

    async fn details(
        &self,
        item_id: u64,
        category: Category,
    ) -> Result<TitleDetails, ScoutError> {
        Err(ScoutError::Http(format!(
            "no details scripted for {category} {item_id}"
        )))
    }
}
