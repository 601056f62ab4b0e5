//! Core search orchestrator: dual-category fan-out, filter, score, rank.
//!
//! Both category searches run concurrently and must both succeed. Their
//! results are concatenated (movies first), filtered to candidates with a
//! poster, scored against the query, filtered to positive scores, sorted by
//! score then popularity, and truncated.

use std::cmp::Ordering;

use crate::config::ScoutConfig;
use crate::error::ScoutError;
use crate::provider::MetadataProvider;
use crate::types::{Candidate, Category, TimeWindow};

use super::scoring::score_candidate;

/// Page requested from each category search. Only the first page is used.
const FIRST_PAGE: u32 = 1;

/// The trimmed query, or `None` when it is too short to send.
pub fn accept_query(query: &str, min_chars: usize) -> Option<&str> {
    let trimmed = query.trim();
    (trimmed.chars().count() >= min_chars).then_some(trimmed)
}

/// Search both categories and return the ranked result set.
///
/// # Pipeline
///
/// 1. Reject queries shorter than `config.min_query_chars` (returns `Ok(vec![])`)
/// 2. Query every [`Category::all`] concurrently with [`futures::future::try_join_all`]
/// 3. Concatenate movie results, then TV results
/// 4. Drop candidates without a poster
/// 5. Score each candidate against the query
/// 6. Drop candidates scoring 0
/// 7. Stable sort by score, then popularity (both descending)
/// 8. Truncate to `config.max_results`
///
/// # Errors
///
/// Returns [`ScoutError::SearchFailed`] if either category search fails.
/// No partial results are returned.
pub async fn aggregate_search<P: MetadataProvider>(
    provider: &P,
    query: &str,
    config: &ScoutConfig,
) -> Result<Vec<Candidate>, ScoutError> {
    let Some(query) = accept_query(query, config.min_query_chars) else {
        tracing::trace!("query too short, skipping search");
        return Ok(Vec::new());
    };
    tracing::trace!(query, "searching movies and tv");

    let per_category = futures::future::try_join_all(
        Category::all()
            .iter()
            .map(|&category| fetch_category(provider, category, query)),
    )
    .await?;

    let all_results: Vec<Candidate> = per_category.into_iter().flatten().collect();
    tracing::debug!(count = all_results.len(), "category searches returned");

    Ok(rank_candidates(all_results, query, config.max_results))
}

/// Filter, score, sort and truncate an already-merged candidate list.
///
/// Pure: no I/O, never fails. Every returned candidate has a poster and a
/// positive `relevance_score`.
pub fn rank_candidates(
    candidates: Vec<Candidate>,
    query: &str,
    max_results: usize,
) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = candidates
        .into_iter()
        .filter(Candidate::has_poster)
        .filter_map(|mut candidate| {
            let score = score_candidate(&candidate, query);
            (score > 0).then(|| {
                candidate.relevance_score = Some(score);
                candidate
            })
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(max_results);
    ranked
}

/// Fetch the trending list from the first `config.trending_limit` records.
///
/// Failures are logged at warn level and reported as an empty list.
pub async fn trending<P: MetadataProvider>(
    provider: &P,
    window: TimeWindow,
    config: &ScoutConfig,
) -> Vec<Candidate> {
    match provider.trending(window, config.trending_limit).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(%window, error = %err, "trending lookup failed");
            Vec::new()
        }
    }
}

/// Score descending, then popularity descending.
fn compare_ranked(a: &Candidate, b: &Candidate) -> Ordering {
    b.relevance_score
        .cmp(&a.relevance_score)
        .then_with(|| b.popularity.total_cmp(&a.popularity))
}

async fn fetch_category<P: MetadataProvider>(
    provider: &P,
    category: Category,
    query: &str,
) -> Result<Vec<Candidate>, ScoutError> {
    provider
        .search_category(category, query, FIRST_PAGE)
        .await
        .map(|mut items| {
            for item in &mut items {
                item.category = category;
            }
            items
        })
        .map_err(|err| {
            tracing::warn!(%category, error = %err, "category search failed");
            ScoutError::SearchFailed(format!("{category}: {err}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{candidate, MockProvider};

    fn is_ranked(results: &[Candidate]) -> bool {
        results.windows(2).all(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            a.relevance_score > b.relevance_score
                || (a.relevance_score == b.relevance_score && a.popularity >= b.popularity)
        })
    }

    #[test]
    fn accept_query_trims_and_checks_length() {
        assert_eq!(accept_query("  up  ", 2), Some("up"));
        assert_eq!(accept_query(" a ", 2), None);
        assert_eq!(accept_query("", 2), None);
        assert_eq!(accept_query("é", 2), None);
    }

    #[test]
    fn rank_drops_posterless_and_irrelevant() {
        let mut no_poster = candidate(1, "Batman", Category::Movie, 90.0);
        no_poster.poster_path = None;
        let irrelevant = candidate(2, "Titanic", Category::Movie, 90.0);
        let relevant = candidate(3, "Batman Returns", Category::Movie, 10.0);

        let ranked = rank_candidates(vec![no_poster, irrelevant, relevant], "batman", 12);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, 3);
        assert_eq!(ranked[0].relevance_score, Some(90));
    }

    #[test]
    fn rank_breaks_ties_by_popularity() {
        let ranked = rank_candidates(
            vec![
                candidate(1, "Batman Returns", Category::Movie, 10.0),
                candidate(2, "Batman Forever", Category::Movie, 40.0),
                candidate(3, "Batman", Category::Tv, 1.0),
            ],
            "batman",
            12,
        );
        let ids: Vec<u64> = ranked.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(is_ranked(&ranked));
    }

    #[test]
    fn rank_is_stable_for_full_ties() {
        let ranked = rank_candidates(
            vec![
                candidate(1, "Batman Returns", Category::Movie, 10.0),
                candidate(2, "Batman Returns", Category::Tv, 10.0),
            ],
            "batman",
            12,
        );
        let ids: Vec<u64> = ranked.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn rank_truncates() {
        let many: Vec<Candidate> = (0..30)
            .map(|i| candidate(i, &format!("Batman {i}"), Category::Movie, i as f64))
            .collect();
        let ranked = rank_candidates(many, "batman", 12);
        assert_eq!(ranked.len(), 12);
        assert_eq!(ranked[0].id, 29);
        assert!(is_ranked(&ranked));
    }

    #[tokio::test]
    async fn short_query_never_reaches_provider() {
        let provider = MockProvider::new();
        for query in ["", " ", "a", "  b  "] {
            let results = aggregate_search(&provider, query, &ScoutConfig::default())
                .await
                .expect("short query is not an error");
            assert!(results.is_empty());
        }
        assert_eq!(provider.search_calls(), 0);
    }

    #[tokio::test]
    async fn merges_both_categories_and_tags_them() {
        let provider = MockProvider::new()
            .with_search(
                Category::Movie,
                vec![candidate(1, "Dune", Category::Tv, 50.0)],
            )
            .with_search(
                Category::Tv,
                vec![candidate(2, "Dune: Prophecy", Category::Movie, 30.0)],
            );
        let results = aggregate_search(&provider, "dune", &ScoutConfig::default())
            .await
            .expect("search should succeed");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[0].category, Category::Movie);
        assert_eq!(results[1].category, Category::Tv);
        assert_eq!(provider.search_calls(), 2);
    }

    #[tokio::test]
    async fn one_failing_category_fails_whole_search() {
        let provider = MockProvider::new()
            .with_search(
                Category::Movie,
                vec![candidate(1, "Dune", Category::Movie, 50.0)],
            )
            .failing_search(Category::Tv);
        let result = aggregate_search(&provider, "dune", &ScoutConfig::default()).await;
        assert!(matches!(result, Err(ScoutError::SearchFailed(_))));
    }

    #[tokio::test]
    async fn respects_configured_max_results() {
        let movies: Vec<Candidate> = (0..10)
            .map(|i| candidate(i, &format!("Alien {i}"), Category::Movie, 5.0))
            .collect();
        let provider = MockProvider::new().with_search(Category::Movie, movies);
        let config = ScoutConfig {
            max_results: 3,
            ..Default::default()
        };
        let results = aggregate_search(&provider, "alien", &config)
            .await
            .expect("search should succeed");
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn trending_truncates_and_degrades() {
        let items: Vec<Candidate> = (0..15)
            .map(|i| candidate(i, &format!("Hit {i}"), Category::Movie, 1.0))
            .collect();
        let provider = MockProvider::new().with_trending(items);
        let config = ScoutConfig::default();
        assert_eq!(trending(&provider, TimeWindow::Day, &config).await.len(), 10);

        let failing = MockProvider::new();
        assert!(trending(&failing, TimeWindow::Week, &config).await.is_empty());
    }
}
