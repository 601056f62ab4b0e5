//! Shared HTTP client for metadata API requests.
//!
//! Provides a configured [`reqwest::Client`] with the configured timeout,
//! User-Agent and JSON `Accept` header.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::ScoutConfig;
use crate::error::ScoutError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("streamscout/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the metadata API.
///
/// The client has:
/// - Timeout from config
/// - Custom or default User-Agent
/// - `Accept: application/json` on every request
/// - gzip decompression
///
/// # Errors
///
/// Returns [`ScoutError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ScoutConfig) -> Result<reqwest::Client, ScoutError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .default_headers(headers)
        .gzip(true)
        .build()
        .map_err(|e| ScoutError::Http(format!("failed to build HTTP client: {e}")))
}
