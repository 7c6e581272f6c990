//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Discovery pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Credentials for the primary search API
    #[serde(default)]
    pub api: ApiCredentials,

    /// Rate limiting settings for the scraping fetcher
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Identification header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            api: ApiCredentials::default(),
            rate_limit: RateLimitConfig::default(),
            user_agent: default_user_agent(),
        }
    }
}

/// Credentials for the primary search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCredentials {
    /// API key for the search service (optional; absence disables the
    /// API tier)
    #[serde(default)]
    pub key: Option<String>,

    /// Search engine identifier required alongside the key
    #[serde(default)]
    pub engine_id: Option<String>,
}

impl ApiCredentials {
    /// Whether both pieces needed to call the API are present
    pub fn is_configured(&self) -> bool {
        self.key.is_some() && self.engine_id.is_some()
    }
}

impl Default for ApiCredentials {
    fn default() -> Self {
        Self {
            key: std::env::var("EDUSCOUT_SEARCH_API_KEY").ok(),
            engine_id: std::env::var("EDUSCOUT_SEARCH_ENGINE_ID").ok(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Minimum delay between consecutive fetches, measured from the end of
    /// the previous request, shared across all target hosts
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Total request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_cooldown_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION"),
        " (educational research agent)"
    )
    .to_string()
}

/// Load configuration from a file, layered with `EDUSCOUT_`-prefixed
/// environment variables
pub fn load_config(path: &PathBuf) -> Result<DiscoveryConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("EDUSCOUT"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> DiscoveryConfig {
    DiscoveryConfig::default()
}
