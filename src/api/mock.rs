//! Scripted search API used by tests to drive the fallback ladder.

use std::sync::Mutex;

use async_trait::async_trait;

use super::SearchApi;
use crate::error::DiscoveryError;
use crate::models::{RawCandidate, SearchQuery};

/// What the mock should do on the next `search` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return these candidates
    Candidates(Vec<RawCandidate>),
    /// Fail with a rate-limit signal
    RateLimited,
    /// Fail with a generic availability error
    Unavailable,
}

/// A search API whose next response is scripted by the test.
///
/// With no outcome set, `search` returns an empty candidate list.
pub struct MockSearchApi {
    outcome: Mutex<Option<MockOutcome>>,
}

impl MockSearchApi {
    pub fn new() -> Self {
        Self {
            outcome: Mutex::new(None),
        }
    }

    /// Script the next response
    pub fn set_outcome(&self, outcome: MockOutcome) {
        if let Ok(mut slot) = self.outcome.lock() {
            *slot = Some(outcome);
        }
    }

    /// Clear any scripted response
    pub fn clear(&self) {
        if let Ok(mut slot) = self.outcome.lock() {
            *slot = None;
        }
    }
}

impl Default for MockSearchApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchApi for MockSearchApi {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Search API"
    }

    async fn search(
        &self,
        _query: &SearchQuery,
        max: usize,
    ) -> Result<Vec<RawCandidate>, DiscoveryError> {
        let outcome = self
            .outcome
            .lock()
            .ok()
            .and_then(|slot| slot.clone());

        match outcome {
            Some(MockOutcome::Candidates(candidates)) => {
                Ok(candidates.into_iter().take(max).collect())
            }
            Some(MockOutcome::RateLimited) => Err(DiscoveryError::RateLimited),
            Some(MockOutcome::Unavailable) => Err(DiscoveryError::ApiUnavailable(
                "scripted outage".to_string(),
            )),
            None => Ok(Vec::new()),
        }
    }
}

/// Build a plausible candidate for tests
pub fn make_candidate(title: &str, url: &str) -> RawCandidate {
    let site = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| "web".to_string());
    RawCandidate::new(
        title,
        url,
        site,
        format!("A complete guide covering {}", title.to_lowercase()),
    )
}
