//! Primary search API tier.
//!
//! The [`SearchApi`] trait abstracts the hosted search service so the
//! orchestrator can run against the real Google Custom Search adapter in
//! production and a scripted mock in tests.

pub mod google;
pub mod mock;

use async_trait::async_trait;

use crate::error::DiscoveryError;
use crate::models::{RawCandidate, SearchQuery};

/// A hosted search service that can answer a discovery query directly.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Unique identifier for this API adapter
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Run the query and return up to `max` raw candidates.
    ///
    /// Returns [`DiscoveryError::RateLimited`] on an explicit rate-limit
    /// signal and [`DiscoveryError::ApiUnavailable`] on any other failure;
    /// both move the caller to the scrape tier.
    async fn search(
        &self,
        query: &SearchQuery,
        max: usize,
    ) -> Result<Vec<RawCandidate>, DiscoveryError>;
}

pub use google::GoogleSearchApi;
pub use mock::{make_candidate, MockOutcome, MockSearchApi};
