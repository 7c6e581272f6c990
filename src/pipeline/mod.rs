//! The discovery pipeline: fetch, extract, classify, score, dedupe, rank.
//!
//! [`Discovery`] is the orchestrator; the stage modules are pure functions
//! (extract, classify, score, dedup) around one stateful rate-limited
//! fetcher, so each stage is testable on its own.

mod classify;
mod dedup;
mod discover;
mod extract;
mod fallback;
mod fetch;
mod score;

pub use classify::classify;
pub use dedup::dedupe;
pub use discover::Discovery;
pub use extract::extract;
pub use fallback::static_resources;
pub use fetch::RateLimitedFetcher;
pub use score::{rank, score};
