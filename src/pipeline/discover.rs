//! Discovery orchestrator: runs the tier ladder for one query.

use std::sync::Arc;

use tracing::{info, warn};

use super::{classify, dedupe, extract, rank, score, static_resources, RateLimitedFetcher};
use crate::api::{GoogleSearchApi, SearchApi};
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::models::{ContentType, RawCandidate, ResourceSet, ScoredResource, SearchQuery, Tier};
use crate::sites::SiteRegistry;
use crate::topic::detect_category;

/// Resource discovery engine.
///
/// Tries the primary search API first, falls back to scraping the
/// educational site catalog, and finally degrades to the curated static
/// catalog. `discover` is infallible: the caller always gets a
/// [`ResourceSet`], tagged with the tier that produced it.
pub struct Discovery {
    config: DiscoveryConfig,
    api: Option<Arc<dyn SearchApi>>,
    fetcher: RateLimitedFetcher,
    sites: SiteRegistry,
}

impl Discovery {
    /// Build a discovery engine from configuration. The API tier is
    /// enabled only when credentials are configured.
    pub fn new(config: DiscoveryConfig) -> Self {
        let api: Option<Arc<dyn SearchApi>> = match GoogleSearchApi::from_config(&config) {
            Ok(api) => Some(Arc::new(api)),
            Err(e) => {
                info!("API tier disabled: {}", e);
                None
            }
        };

        let fetcher = RateLimitedFetcher::new(&config);
        Self {
            config,
            api,
            fetcher,
            sites: SiteRegistry::new(),
        }
    }

    /// Build an engine from explicit parts (used in tests and custom
    /// deployments)
    pub fn with_parts(
        config: DiscoveryConfig,
        api: Option<Arc<dyn SearchApi>>,
        sites: SiteRegistry,
    ) -> Self {
        let fetcher = RateLimitedFetcher::new(&config);
        Self {
            config,
            api,
            fetcher,
            sites,
        }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Discover resources for a query. Never fails: each tier's failure
    /// moves to the next, and the static catalog always answers.
    pub async fn discover(&self, query: &SearchQuery) -> ResourceSet {
        if let Some(api) = &self.api {
            match self.try_api(api.as_ref(), query).await {
                Ok(set) => return set,
                Err(e) => warn!("API tier failed, falling back to scraping: {}", e),
            }
        } else {
            info!("API tier not configured, starting with the scrape tier");
        }

        match self.try_scrape(query).await {
            Ok(set) => return set,
            Err(e) => warn!("Scrape tier failed, falling back to static catalog: {}", e),
        }

        self.static_tier(query)
    }

    async fn try_api(
        &self,
        api: &dyn SearchApi,
        query: &SearchQuery,
    ) -> Result<ResourceSet, DiscoveryError> {
        // Overfetch so classification and deduplication have slack
        let candidates = api
            .search(query, query.max_results.saturating_mul(2))
            .await?;
        info!("API tier returned {} candidates", candidates.len());

        let scored = self.classify_and_score(candidates, None, query);
        let resources = finish(scored, query.max_results);
        if resources.is_empty() {
            return Err(DiscoveryError::NoResourcesFound);
        }

        Ok(ResourceSet::new(query.topic.clone(), Tier::Api, resources))
    }

    async fn try_scrape(&self, query: &SearchQuery) -> Result<ResourceSet, DiscoveryError> {
        let category = detect_category(&query.topic);
        let sites = self.sites.for_category(category);
        info!(
            "Scrape tier: {} sites for category {}",
            sites.len(),
            category
        );

        let mut pool: Vec<ScoredResource> = Vec::new();

        for site in sites {
            let url = site.search_url(&query.topic);
            let body = match self.fetcher.fetch(&site.id, &url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Skipping site {}: {}", site.id, e);
                    continue;
                }
            };

            let candidates = extract(site, &body);
            if candidates.is_empty() {
                warn!("No candidates extracted from {}", site.id);
                continue;
            }

            let scored = self.classify_and_score(candidates, Some(site.default_type), query);
            pool.extend(scored);

            // Stop fetching once enough distinct resources are in hand
            if dedupe(pool.clone()).len() >= query.max_results {
                break;
            }
        }

        let resources = finish(pool, query.max_results);
        if resources.is_empty() {
            return Err(DiscoveryError::NoResourcesFound);
        }

        Ok(ResourceSet::new(query.topic.clone(), Tier::Scrape, resources))
    }

    fn static_tier(&self, query: &SearchQuery) -> ResourceSet {
        let category = detect_category(&query.topic);
        info!("Static tier: serving curated {} resources", category);
        let resources = static_resources(category, &query.topic, query.max_results);
        ResourceSet::new(query.topic.clone(), Tier::Static, resources)
    }

    fn classify_and_score(
        &self,
        candidates: Vec<RawCandidate>,
        site_default: Option<ContentType>,
        query: &SearchQuery,
    ) -> Vec<ScoredResource> {
        let query_text = query.scoring_text();
        candidates
            .into_iter()
            .filter_map(|candidate| classify(candidate, site_default))
            .filter(|classified| query.content.matches(classified.content_type))
            .map(|classified| score(classified, &query_text))
            .collect()
    }
}

/// Dedupe, rank, and truncate a scored pool
fn finish(pool: Vec<ScoredResource>, max: usize) -> Vec<ScoredResource> {
    let mut resources = dedupe(pool);
    rank(&mut resources);
    resources.truncate(max);
    resources
}
