//! Core data structures for queries and learning resources.

mod query;
mod resource;

pub use query::{ContentFilter, SearchQuery};
pub use resource::{
    ClassifiedCandidate, ContentType, Difficulty, RawCandidate, ResourceSet, ScoredResource, Tier,
};
