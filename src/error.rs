//! Error taxonomy for the discovery pipeline.
//!
//! Every variant here maps to a fallback action rather than a fatal path:
//! API-level failures move discovery to the scrape tier, per-site failures
//! skip that site, and exhaustion of every tier degrades to the static
//! result set instead of raising.

/// Errors that can occur during resource discovery
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// The primary search API is missing credentials, failed to
    /// authenticate, or returned a non-success status
    #[error("Search API unavailable: {0}")]
    ApiUnavailable(String),

    /// The primary search API returned an explicit rate-limit signal
    #[error("Search API rate limit exceeded")]
    RateLimited,

    /// A site fetch failed (network, transport, or non-success status)
    #[error("Fetch failed for {site}: {cause}")]
    FetchFailed { site: String, cause: String },

    /// A site's markup no longer matches its extraction rules
    #[error("Extraction produced no candidates for {0}")]
    ExtractionFailed(String),

    /// Every tier was exhausted without producing a candidate
    #[error("No resources found")]
    NoResourcesFound,
}

impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        DiscoveryError::ApiUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::ApiUnavailable(format!("malformed response: {}", err))
    }
}
