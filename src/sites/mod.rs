//! Educational site catalog with declarative extraction rules.
//!
//! Each supported site is one [`SiteRules`] value: where to search and which
//! CSS selectors pull out candidate titles, links, and snippets. Adding a
//! site means adding one entry to the catalog; the orchestrator and the
//! extractor never change.

mod catalog;

use serde::{Deserialize, Serialize};

use crate::models::ContentType;
use crate::topic::TopicCategory;

/// Declarative extraction rule set for one educational site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRules {
    /// Unique identifier, e.g. "freecodecamp"
    pub id: String,

    /// Human-readable site name
    pub name: String,

    /// Base URL used to resolve relative links
    pub base: String,

    /// Search URL template containing a `{query}` placeholder
    pub search_template: String,

    /// CSS selector for one result container
    pub container: String,

    /// CSS selector for the title, relative to the container
    pub title: String,

    /// CSS selector for the link, relative to the container
    pub link: String,

    /// CSS selector for the snippet/summary, relative to the container
    pub snippet: String,

    /// Content type this site predominantly hosts
    pub default_type: ContentType,

    /// Topic categories this site is relevant for; [`TopicCategory::General`]
    /// marks a site used for every category
    pub categories: Vec<TopicCategory>,
}

impl SiteRules {
    /// Create rules with required fields; selectors default to common
    /// article markup and can be overridden with [`SiteRules::selectors`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base: impl Into<String>,
        search_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base: base.into(),
            search_template: search_template.into(),
            container: "article".into(),
            title: "h2".into(),
            link: "a".into(),
            snippet: "p".into(),
            default_type: ContentType::Article,
            categories: vec![TopicCategory::General],
        }
    }

    /// Override the container/title/link/snippet selectors
    pub fn selectors(
        mut self,
        container: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        self.container = container.into();
        self.title = title.into();
        self.link = link.into();
        self.snippet = snippet.into();
        self
    }

    /// Set the content type this site predominantly hosts
    pub fn default_type(mut self, content_type: ContentType) -> Self {
        self.default_type = content_type;
        self
    }

    /// Set the topic categories this site serves
    pub fn categories(mut self, categories: &[TopicCategory]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    /// Build the search URL for a topic
    pub fn search_url(&self, topic: &str) -> String {
        self.search_template
            .replace("{query}", &urlencoding::encode(topic))
    }

    /// Whether this site is relevant to a topic category
    pub fn serves(&self, category: TopicCategory) -> bool {
        self.categories.contains(&category) || self.categories.contains(&TopicCategory::General)
    }
}

/// Ordered registry of site rule sets.
///
/// Order matters: the scrape tier visits sites in registration order, so the
/// catalog lists higher-preference sites first.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Vec<SiteRules>,
}

impl SiteRegistry {
    /// Create a registry with the full built-in catalog
    pub fn new() -> Self {
        Self::with_rules(catalog::all())
    }

    /// Create a registry from explicit rules (useful for tests and
    /// custom deployments)
    pub fn with_rules(rules: Vec<SiteRules>) -> Self {
        Self { sites: rules }
    }

    /// Append a site to the registry
    pub fn register(&mut self, rules: SiteRules) {
        self.sites.push(rules);
    }

    /// Get a site by id
    pub fn get(&self, id: &str) -> Option<&SiteRules> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// All sites in preference order
    pub fn all(&self) -> impl Iterator<Item = &SiteRules> {
        self.sites.iter()
    }

    /// Sites relevant to a topic category, in preference order
    pub fn for_category(&self, category: TopicCategory) -> Vec<&SiteRules> {
        self.sites.iter().filter(|s| s.serves(category)).collect()
    }

    /// Check if a site exists
    pub fn has(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
