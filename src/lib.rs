//! # EduScout
//!
//! A resource discovery engine for personalized learning plans. Given a
//! topic and learning objective, it finds, classifies, scores, and ranks
//! educational resources from across the web.
//!
//! ## Architecture
//!
//! - [`models`]: Core data structures (SearchQuery, ScoredResource, ResourceSet)
//! - [`api`]: Primary search API tier with a trait-based adapter
//! - [`sites`]: Declarative catalog of scrapable educational sites
//! - [`pipeline`]: Fetch, extract, classify, score, dedupe, rank stages and
//!   the [`pipeline::Discovery`] orchestrator
//! - [`topic`]: Keyword-based topic categorization
//! - [`config`]: Configuration management
//!
//! Discovery degrades through three tiers (API, scrape, static catalog)
//! and never returns an error to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use eduscout::{Discovery, SearchQuery};
//!
//! # async fn run() {
//! let engine = Discovery::new(eduscout::config::get_config());
//! let query = SearchQuery::new("rust ownership").max_results(5);
//! let results = engine.discover(&query).await;
//! println!("tier: {}, {} resources", results.tier, results.len());
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sites;
pub mod topic;

// Re-export commonly used types
pub use error::DiscoveryError;
pub use models::{ContentFilter, ResourceSet, ScoredResource, SearchQuery, Tier};
pub use pipeline::Discovery;
pub use sites::{SiteRegistry, SiteRules};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
