//! Client configuration with sensible defaults.
//!
//! [`ScoutConfig`] controls where the metadata service lives, how requests
//! authenticate, and the result-set bounds applied by the orchestrator.
//! It can be persisted as TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};
use crate::types::{Candidate, ProviderOffer, DEFAULT_LOGO_SIZE, DEFAULT_POSTER_SIZE};

/// Configuration for search, availability and trending lookups.
///
/// Use [`Default::default()`] (or [`ScoutConfig::from_env`]) and override
/// fields as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Metadata API root, without a trailing slash.
    pub base_url: String,
    /// Image CDN root used to build poster and logo URLs.
    pub image_base_url: String,
    /// v3 API key, sent as the `api_key` query parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// v4 read access token, sent as a bearer token. Wins over `api_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Availability region (ISO 3166-1 code).
    pub region: String,
    /// Optional `language` parameter, e.g. `en-US`.
    pub language: Option<String>,
    /// Whether category searches include adult titles.
    pub include_adult: bool,
    /// Trimmed queries shorter than this are answered with no results.
    pub min_query_chars: usize,
    /// Maximum number of ranked search results.
    pub max_results: usize,
    /// Maximum number of streaming offers per item.
    pub max_providers: usize,
    /// Maximum number of trending entries.
    pub trending_limit: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent. Defaults to `streamscout/<version>`.
    pub user_agent: Option<String>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".into(),
            image_base_url: "https://image.tmdb.org/t/p".into(),
            api_key: None,
            access_token: None,
            region: "US".into(),
            language: None,
            include_adult: false,
            min_query_chars: 2,
            max_results: 12,
            max_providers: 6,
            trending_limit: 10,
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl ScoutConfig {
    /// Defaults overlaid with `TMDB_API_KEY`, `TMDB_ACCESS_TOKEN` and
    /// `TMDB_REGION` from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = non_empty_env("TMDB_API_KEY") {
            config.api_key = Some(key);
        }
        if let Some(token) = non_empty_env("TMDB_ACCESS_TOKEN") {
            config.access_token = Some(token);
        }
        if let Some(region) = non_empty_env("TMDB_REGION") {
            config.region = region;
        }
        config
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Whether any credential is configured.
    pub fn has_credentials(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.api_key) || set(&self.access_token)
    }

    /// The access token, if one is set and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Poster URL for `candidate` on the configured image CDN, at the
    /// default poster size.
    pub fn poster_url(&self, candidate: &Candidate) -> Option<String> {
        candidate.poster_url(&self.image_base_url, DEFAULT_POSTER_SIZE)
    }

    /// Logo URL for `offer` on the configured image CDN, at the default
    /// logo size.
    pub fn logo_url(&self, offer: &ProviderOffer) -> Option<String> {
        offer.logo_url(&self.image_base_url, DEFAULT_LOGO_SIZE)
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] when a bound is zero, the region is
    /// empty, or `base_url` is not a valid URL.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_results", self.max_results),
            ("max_providers", self.max_providers),
            ("trending_limit", self.trending_limit),
            ("min_query_chars", self.min_query_chars),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ScoutError::Config(format!(
                    "{field} must be greater than 0"
                )));
            }
        }
        if self.timeout_seconds == 0 {
            return Err(ScoutError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(ScoutError::Config("region must not be empty".into()));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| ScoutError::Config(format!("invalid base_url: {e}")))?;
        Ok(())
    }

    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScoutError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ScoutError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/streamscout/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("streamscout").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("streamscout")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/streamscout-config/config.toml")
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
