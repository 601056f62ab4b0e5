//! TMDB v3 REST client.
//!
//! Implements [`MetadataProvider`] over `reqwest`. Requests authenticate
//! with a v4 read token (`Authorization: Bearer`) when one is configured,
//! otherwise with the v3 `api_key` query parameter. Credentials are never
//! logged and are stripped from transport error messages.

pub mod models;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use crate::http;
use crate::provider::MetadataProvider;
use crate::types::{Availability, Candidate, Category, TimeWindow, TitleDetails};

use self::models::{CandidateRecord, ResultsPage};

/// HTTP client for the TMDB API.
///
/// Cheap to share by reference across concurrent lookups; the underlying
/// connection pool is reused between calls.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    config: ScoutConfig,
}

impl TmdbClient {
    /// Create a client from a validated config with credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] if the config is invalid or carries
    /// neither an API key nor an access token, and [`ScoutError::Http`] if
    /// the HTTP client cannot be built.
    pub fn new(config: ScoutConfig) -> Result<Self> {
        config.validate()?;
        if !config.has_credentials() {
            return Err(ScoutError::Config(
                "missing credentials: set api_key or access_token".into(),
            ));
        }
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Build the full URL for `path` with common and call-specific parameters.
    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|e| ScoutError::Config(format!("invalid endpoint {path}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            if self.config.bearer_token().is_none() {
                if let Some(key) = self.config.api_key.as_deref() {
                    query.append_pair("api_key", key);
                }
            }
            if let Some(language) = self.config.language.as_deref() {
                query.append_pair("language", language);
            }
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path, params)?;

        let mut request = self.client.get(url);
        if let Some(token) = self.config.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScoutError::Http(format!("{path} request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::Http(format!("{path} returned status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ScoutError::Http(format!("{path} body read failed: {}", e.without_url())))?;
        tracing::trace!(path, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|e| ScoutError::Parse(format!("{path}: {e}")))
    }
}

impl MetadataProvider for TmdbClient {
    async fn search_category(
        &self,
        category: Category,
        query: &str,
        page: u32,
    ) -> Result<Vec<Candidate>> {
        let path = format!("/search/{}", category.path_segment());
        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("include_adult", self.config.include_adult.to_string()),
        ];
        let results_page: ResultsPage = self.get_json(&path, &params).await?;
        Ok(results_page
            .results
            .into_iter()
            .map(|record| record.into_candidate(category))
            .collect())
    }

    async fn availability(&self, item_id: u64, category: Category) -> Result<Availability> {
        let path = format!("/{}/{item_id}/watch/providers", category.path_segment());
        self.get_json(&path, &[]).await
    }

    async fn trending(&self, window: TimeWindow, limit: usize) -> Result<Vec<Candidate>> {
        let path = format!("/trending/all/{}", window.path_segment());
        let results_page: ResultsPage = self.get_json(&path, &[]).await?;
        Ok(results_page
            .results
            .into_iter()
            .take(limit)
            .filter_map(CandidateRecord::into_tagged_candidate)
            .collect())
    }

    async fn details(&self, item_id: u64, category: Category) -> Result<TitleDetails> {
        let path = format!("/{}/{item_id}", category.path_segment());
        self.get_json(&path, &[]).await
    }
}
