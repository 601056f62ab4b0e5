//! Wire records returned by the TMDB v3 API.
//!
//! Only the search/trending page shapes live here; availability and detail
//! records deserialize straight into [`crate::types`].

use serde::Deserialize;

use crate::types::{Candidate, Category};

/// One page of `/search/{category}` or `/trending/all/{window}`.
///
/// `results` is required: a body without it is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage {
    #[serde(default)]
    pub page: Option<u32>,
    pub results: Vec<CandidateRecord>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// A movie, TV show or (in trending) person record.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    /// Only present on mixed listings such as trending.
    #[serde(default)]
    pub media_type: Option<String>,
}

impl CandidateRecord {
    /// Convert to a domain candidate in `category`. Missing popularity is 0.
    pub fn into_candidate(self, category: Category) -> Candidate {
        Candidate {
            id: self.id,
            title: self.title,
            name: self.name,
            poster_path: self.poster_path,
            release_date: self.release_date,
            first_air_date: self.first_air_date,
            overview: self.overview,
            vote_average: self.vote_average,
            category,
            popularity: self.popularity.unwrap_or(0.0).max(0.0),
            relevance_score: None,
        }
    }

    /// Convert using the record's own `media_type`; `None` for people and
    /// unknown kinds.
    pub fn into_tagged_candidate(self) -> Option<Candidate> {
        let category = Category::from_media_type(self.media_type.as_deref()?)?;
        Some(self.into_candidate(category))
    }
}
