//! # streamscout
//!
//! Movie and TV discovery against the TMDB metadata service.
//!
//! This crate answers two questions for a presentation layer: "what titles
//! match this query?" and "where can I stream this title with a
//! subscription I already have?". Rendering is the caller's concern.
//!
//! ## Design
//!
//! - Searches movies and TV concurrently; both must succeed
//! - Ranks by lexical relevance to the query, then popularity, top 12
//! - Resolves availability per item: subscription offers only, one per
//!   brand, shortest name preferred, at most 6
//! - Availability and trending lookups never fail; they degrade to empty
//! - Stateless: no caching, no retries
//!
//! The free functions below build a [`TmdbClient`] per call. To reuse a
//! connection pool across many lookups, build one [`TmdbClient`] and call
//! the [`orchestrator`] functions with it.
//!
//! ## Security
//!
//! - API keys and tokens never appear in logs or error messages
//! - Query text is logged only at trace level

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod provider;
pub mod tmdb;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use provider::MetadataProvider;
pub use tmdb::TmdbClient;
pub use types::{Candidate, Category, OfferKind, ProviderOffer, TimeWindow, TitleDetails};

/// Search movies and TV shows, ranked by relevance to `query`.
///
/// Queries shorter than `config.min_query_chars` after trimming return an
/// empty list without contacting the service, whatever the rest of the
/// config holds.
///
/// # Errors
///
/// Returns [`ScoutError::Config`] if the config is invalid or lacks
/// credentials (for queries long enough to send), and
/// [`ScoutError::SearchFailed`] if either category search fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> streamscout::Result<()> {
/// let config = streamscout::ScoutConfig::default().with_api_key("your-key");
/// let results = streamscout::search("batman", &config).await?;
/// for item in &results {
///     println!("{} ({:?})", item.display_title(), item.relevance_score);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &ScoutConfig) -> Result<Vec<Candidate>> {
    if orchestrator::search::accept_query(query, config.min_query_chars).is_none() {
        tracing::trace!("query too short, skipping search");
        return Ok(Vec::new());
    }
    let client = TmdbClient::new(config.clone())?;
    orchestrator::search::aggregate_search(&client, query, config).await
}

/// Search with configuration taken from the environment.
///
/// Convenience wrapper around [`search`] using [`ScoutConfig::from_env()`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str) -> Result<Vec<Candidate>> {
    search(query, &ScoutConfig::from_env()).await
}

/// Subscription streaming offers for one item in `config.region`.
///
/// Never fails: an unusable config, a failed lookup, or an item that is
/// only available to rent or buy all yield an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use streamscout::{Category, ScoutConfig};
///
/// let config = ScoutConfig::default().with_api_key("your-key");
/// let offers = streamscout::resolve_providers(272, Category::Movie, &config).await;
/// for offer in &offers {
///     println!("{}: {:?}", offer.provider_name, offer.link);
/// }
/// # }
/// ```
pub async fn resolve_providers(
    item_id: u64,
    category: Category,
    config: &ScoutConfig,
) -> Vec<ProviderOffer> {
    match TmdbClient::new(config.clone()) {
        Ok(client) => {
            orchestrator::availability::resolve_providers(&client, item_id, category, config)
                .await
        }
        Err(err) => {
            tracing::warn!(item_id, %category, error = %err, "provider lookup skipped");
            Vec::new()
        }
    }
}

/// Trending movies and TV shows for `window`, at most `config.trending_limit`.
///
/// Never fails; any error yields an empty list.
pub async fn trending(window: TimeWindow, config: &ScoutConfig) -> Vec<Candidate> {
    match TmdbClient::new(config.clone()) {
        Ok(client) => orchestrator::search::trending(&client, window, config).await,
        Err(err) => {
            tracing::warn!(%window, error = %err, "trending lookup skipped");
            Vec::new()
        }
    }
}

/// Full detail record for one item.
///
/// # Errors
///
/// Returns [`ScoutError::Config`] if the config is invalid or lacks
/// credentials, and [`ScoutError::DetailsFailed`] if the fetch fails.
pub async fn details(
    item_id: u64,
    category: Category,
    config: &ScoutConfig,
) -> Result<TitleDetails> {
    let client = TmdbClient::new(config.clone())?;
    client.details(item_id, category).await.map_err(|err| {
        tracing::warn!(item_id, %category, error = %err, "details lookup failed");
        ScoutError::DetailsFailed(format!("{category} {item_id}: {err}"))
    })
}
