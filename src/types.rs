//! Core types for search candidates, streaming offers and item details.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Poster size used by [`Candidate::poster_url`] callers by default.
pub const DEFAULT_POSTER_SIZE: &str = "w500";

/// Logo size used by [`ProviderOffer::logo_url`] callers by default.
pub const DEFAULT_LOGO_SIZE: &str = "w45";

/// The two content kinds the metadata service indexes separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cinematic release.
    Movie,
    /// Episodic series.
    Tv,
}

impl Category {
    /// Path segment used in API routes (`/search/{segment}`, `/{segment}/{id}`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Both categories, in the order their results are concatenated.
    pub fn all() -> &'static [Category] {
        &[Self::Movie, Self::Tv]
    }

    /// Parse a wire `media_type` value. Anything else (e.g. `person`) is `None`.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// A movie or TV show returned by a category search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Metadata service identifier.
    pub id: u64,
    /// Name field used by movies.
    pub title: Option<String>,
    /// Name field used by TV shows.
    pub name: Option<String>,
    /// Poster image path, relative to the image CDN.
    pub poster_path: Option<String>,
    /// Movie release date (`YYYY-MM-DD`).
    pub release_date: Option<String>,
    /// TV first air date (`YYYY-MM-DD`).
    pub first_air_date: Option<String>,
    /// Short synopsis.
    pub overview: Option<String>,
    /// Average user rating (0-10).
    pub vote_average: Option<f64>,
    /// Which category search produced this candidate.
    pub category: Category,
    /// Popularity metric reported by the service (non-negative).
    pub popularity: f64,
    /// Relevance score, attached during aggregation.
    pub relevance_score: Option<u8>,
}

impl Candidate {
    /// The first present, non-empty name field, or `""`.
    pub fn display_title(&self) -> &str {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or("")
    }

    /// Whether the candidate carries a non-empty poster reference.
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Release year from the release date, falling back to the first air date.
    pub fn release_year(&self) -> Option<i32> {
        [self.release_date.as_deref(), self.first_air_date.as_deref()]
            .into_iter()
            .flatten()
            .find_map(parse_year)
    }

    /// Full poster URL for the given CDN root and size (e.g. `w500`).
    pub fn poster_url(&self, image_base_url: &str, size: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url(image_base_url, size, p))
    }
}

/// Availability tier of a streaming offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    /// Included with an existing subscription (wire name `flatrate`).
    #[serde(rename = "flatrate")]
    Subscription,
    /// Paid rental.
    Rent,
    /// Paid purchase.
    Buy,
}

/// A streaming service offering an item in the configured region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOffer {
    /// Metadata service provider identifier.
    pub provider_id: u64,
    /// Display name, e.g. `Netflix Standard with Ads`.
    pub provider_name: String,
    /// Logo image path, relative to the image CDN.
    pub logo_path: Option<String>,
    /// Service-suggested display order, carried through untouched.
    pub display_priority: Option<u32>,
    /// Availability tier.
    pub kind: OfferKind,
    /// Deep link to the item's watch page.
    pub link: Option<String>,
}

impl ProviderOffer {
    /// Full logo URL for the given CDN root and size (e.g. `w45`).
    pub fn logo_url(&self, image_base_url: &str, size: &str) -> Option<String> {
        self.logo_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url(image_base_url, size, p))
    }
}

/// One provider entry inside a region's availability lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: Option<u32>,
}

impl OfferRecord {
    /// Tag this record with its tier, producing an offer without a link.
    pub fn into_offer(self, kind: OfferKind) -> ProviderOffer {
        ProviderOffer {
            provider_id: self.provider_id,
            provider_name: self.provider_name,
            logo_path: self.logo_path,
            display_priority: self.display_priority,
            kind,
            link: None,
        }
    }
}

/// Availability of one item in one region, split by tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionAvailability {
    /// Region-level watch page, used as the deep link for every offer.
    pub link: Option<String>,
    /// Included-with-subscription offers.
    pub flatrate: Option<Vec<OfferRecord>>,
    /// Rental offers.
    pub rent: Option<Vec<OfferRecord>>,
    /// Purchase offers.
    pub buy: Option<Vec<OfferRecord>>,
}

/// Availability of one item keyed by region code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Item identifier echoed by the service.
    #[serde(default)]
    pub id: Option<u64>,
    /// Region code (e.g. `US`) to availability.
    #[serde(default)]
    pub results: HashMap<String, RegionAvailability>,
}

impl Availability {
    /// The entry for `region`, if the item is listed there.
    pub fn region(&self, region: &str) -> Option<&RegionAvailability> {
        self.results.get(region)
    }
}

/// Window for the trending listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Trending today.
    #[default]
    Day,
    /// Trending this week.
    Week,
}

impl TimeWindow {
    /// Path segment used in `/trending/all/{segment}`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// A genre tag on a detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre identifier.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// Detail record for a single movie or TV show.
///
/// Only commonly rendered fields are typed; everything else the service
/// sends is kept in [`TitleDetails::extra`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Movie runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Remaining fields, untyped.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TitleDetails {
    /// The first present, non-empty name field, or `""`.
    pub fn display_title(&self) -> &str {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or("")
    }

    /// Release year from the release date, falling back to the first air date.
    pub fn release_year(&self) -> Option<i32> {
        [self.release_date.as_deref(), self.first_air_date.as_deref()]
            .into_iter()
            .flatten()
            .find_map(parse_year)
    }
}

fn parse_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

fn image_url(base: &str, size: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}/{size}{path}")
    } else {
        format!("{base}/{size}/{path}")
    }
}
