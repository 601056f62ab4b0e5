//! Error types for the streamscout crate.
//!
//! Messages are stable and safe to show to users. API keys and access
//! tokens never appear in error messages.

/// Errors that can occur while talking to the metadata service.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// A category search failed; no partial results are returned.
    #[error("search failed: {0}")]
    SearchFailed(String),

    /// Resolving streaming availability failed. Absorbed by the resolver.
    #[error("provider lookup failed: {0}")]
    ProviderLookup(String),

    /// Fetching the detail record for an item failed.
    #[error("details failed: {0}")]
    DetailsFailed(String),

    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration or missing credentials.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while reading or writing the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for streamscout results.
pub type Result<T> = std::result::Result<T, ScoutError>;
