//! Lexical relevance scoring with a popularity boost.
//!
//! Rules, first match wins (both strings lowercased, query trimmed):
//!
//! ```text
//! title == query            -> 100
//! title starts with query   -> 90
//! otherwise, words are split on single spaces (empty title words kept,
//! empty query words dropped), and per query word:
//!   identical title word    -> exact hit
//!   substring either way    -> partial hit
//!   neither                 -> 0 for the whole candidate
//! score = round(exact_ratio * 60 + partial_ratio * 30 + min(popularity / 100, 1) * 10)
//! ```
//!
//! A candidate whose combined hit ratio is below [`MIN_MATCH_RATIO`] scores 0.

use crate::types::Candidate;

/// Score for a title identical to the query.
pub const EXACT_MATCH_SCORE: u8 = 100;

/// Score for a title that starts with the query.
pub const PREFIX_MATCH_SCORE: u8 = 90;

/// Minimum `exact_ratio + partial_ratio` for a word-level match to count.
pub const MIN_MATCH_RATIO: f64 = 0.6;

const EXACT_WORD_WEIGHT: f64 = 60.0;
const PARTIAL_WORD_WEIGHT: f64 = 30.0;
const POPULARITY_WEIGHT: f64 = 10.0;
const POPULARITY_CEILING: f64 = 100.0;

/// How a single query word matched the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordHit {
    Exact,
    Partial,
}

/// Calculate the relevance of `title` to `query`, in `0..=100`.
///
/// `0` means the candidate should be excluded. Each query word is matched
/// against the title words in order and stops at the first title word that
/// matches either way, so an earlier substring hit shadows a later exact hit.
pub fn relevance_score(title: &str, query: &str, popularity: f64) -> u8 {
    let title = title.to_lowercase();
    let query = query.trim().to_lowercase();

    if title == query {
        return EXACT_MATCH_SCORE;
    }
    if title.starts_with(&query) {
        return PREFIX_MATCH_SCORE;
    }

    let query_words: Vec<&str> = query.split(' ').filter(|w| !w.is_empty()).collect();
    if query_words.is_empty() {
        return 0;
    }
    // Empty title words are kept: "" is a substring of every query word.
    let title_words: Vec<&str> = title.split(' ').collect();

    let mut exact = 0usize;
    let mut partial = 0usize;
    for query_word in &query_words {
        match first_hit(query_word, &title_words) {
            Some(WordHit::Exact) => exact += 1,
            Some(WordHit::Partial) => partial += 1,
            None => return 0,
        }
    }

    let total = query_words.len() as f64;
    let exact_ratio = exact as f64 / total;
    let partial_ratio = partial as f64 / total;
    if exact_ratio + partial_ratio < MIN_MATCH_RATIO {
        return 0;
    }

    let score = exact_ratio * EXACT_WORD_WEIGHT
        + partial_ratio * PARTIAL_WORD_WEIGHT
        + popularity_boost(popularity);
    score.round().clamp(0.0, f64::from(EXACT_MATCH_SCORE)) as u8
}

/// Score a candidate by its display title and popularity.
pub fn score_candidate(candidate: &Candidate, query: &str) -> u8 {
    relevance_score(candidate.display_title(), query, candidate.popularity)
}

/// The first title word that matches `query_word`, and how.
fn first_hit(query_word: &str, title_words: &[&str]) -> Option<WordHit> {
    title_words.iter().find_map(|title_word| {
        if *title_word == query_word {
            Some(WordHit::Exact)
        } else if title_word.contains(query_word) || query_word.contains(*title_word) {
            Some(WordHit::Partial)
        } else {
            None
        }
    })
}

fn popularity_boost(popularity: f64) -> f64 {
    if popularity.is_nan() {
        return 0.0;
    }
    (popularity / POPULARITY_CEILING).clamp(0.0, 1.0) * POPULARITY_WEIGHT
}
