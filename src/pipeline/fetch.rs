//! Rate-limited page fetching for the scrape tier.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;

/// Fetches pages with a single shared cooldown between requests.
///
/// The cooldown is measured from the end of the previous request to the
/// start of the next, across all target hosts. Holding the lock for the
/// whole request serializes fetches, which is intentional: the scrape tier
/// visits sites one at a time.
pub struct RateLimitedFetcher {
    client: reqwest::Client,
    cooldown: Duration,
    last_request_end: Mutex<Option<Instant>>,
}

impl RateLimitedFetcher {
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            client: build_client(&config.user_agent, config.rate_limit.request_timeout_secs),
            cooldown: Duration::from_millis(config.rate_limit.cooldown_ms),
            last_request_end: Mutex::new(None),
        }
    }

    /// Fetch a page body, waiting out the cooldown first.
    pub async fn fetch(&self, site: &str, url: &str) -> Result<String, DiscoveryError> {
        let mut last = self.last_request_end.lock().await;

        if let Some(end) = *last {
            let elapsed = end.elapsed();
            if elapsed < self.cooldown {
                let wait = self.cooldown - elapsed;
                debug!("Cooldown: waiting {:?} before fetching {}", wait, site);
                tokio::time::sleep(wait).await;
            }
        }

        let result = self.request(site, url).await;
        *last = Some(Instant::now());
        result
    }

    async fn request(&self, site: &str, url: &str) -> Result<String, DiscoveryError> {
        debug!("Fetching {} from {}", url, site);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html")
            .send()
            .await
            .map_err(|e| DiscoveryError::FetchFailed {
                site: site.to_string(),
                cause: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DiscoveryError::FetchFailed {
                site: site.to_string(),
                cause: format!("status {}", response.status()),
            });
        }

        response
            .text()
            .await
            .map_err(|e| DiscoveryError::FetchFailed {
                site: site.to_string(),
                cause: e.to_string(),
            })
    }
}

pub(crate) fn build_client(user_agent: &str, timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("Failed to create HTTP client")
}
