//! Google Custom Search adapter.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::SearchApi;
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::models::{RawCandidate, SearchQuery};

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search API adapter.
pub struct GoogleSearchApi {
    client: reqwest::Client,
    key: String,
    engine_id: String,
    endpoint: String,
}

impl GoogleSearchApi {
    /// Build the adapter from configuration. Fails with
    /// [`DiscoveryError::ApiUnavailable`] when credentials are missing,
    /// which disables the API tier.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let (key, engine_id) = match (&config.api.key, &config.api.engine_id) {
            (Some(key), Some(engine_id)) => (key.clone(), engine_id.clone()),
            _ => {
                return Err(DiscoveryError::ApiUnavailable(
                    "search API credentials not configured".to_string(),
                ))
            }
        };

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(
                config.rate_limit.request_timeout_secs,
            ))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            key,
            engine_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the adapter at a different endpoint (used in tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn query_text(query: &SearchQuery) -> String {
        match &query.objective {
            Some(objective) => format!("{} {} tutorial guide learn", query.topic, objective),
            None => format!("{} tutorial guide learn", query.topic),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

fn host_of(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| "web".to_string())
}

#[async_trait::async_trait]
impl SearchApi for GoogleSearchApi {
    fn id(&self) -> &str {
        "google"
    }

    fn name(&self) -> &str {
        "Google Custom Search"
    }

    async fn search(
        &self,
        query: &SearchQuery,
        max: usize,
    ) -> Result<Vec<RawCandidate>, DiscoveryError> {
        // Custom Search caps one page at 10 results
        let num = max.clamp(1, 10);
        let q = Self::query_text(query);
        debug!("Searching Google Custom Search: {}", q);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", q.as_str()),
                ("num", &num.to_string()),
            ])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DiscoveryError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(DiscoveryError::ApiUnavailable(format!(
                "search API returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        let candidates = parsed
            .items
            .into_iter()
            .take(max)
            .map(|item| {
                let site = host_of(&item.link);
                RawCandidate::new(item.title, item.link, site, item.snippet)
            })
            .collect();

        Ok(candidates)
    }
}
