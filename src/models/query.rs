//! Search query model for discovery calls.

use serde::{Deserialize, Serialize};

use super::ContentType;

/// Desired content type for a discovery call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Article,
    Course,
    Video,
    Any,
}

impl ContentFilter {
    /// Whether a classified content type satisfies this filter.
    ///
    /// Documentation counts as article-like content.
    pub fn matches(&self, content_type: ContentType) -> bool {
        match self {
            ContentFilter::Any => true,
            ContentFilter::Article => {
                matches!(content_type, ContentType::Article | ContentType::Documentation)
            }
            ContentFilter::Course => content_type == ContentType::Course,
            ContentFilter::Video => content_type == ContentType::Video,
        }
    }
}

/// Parameters for one resource discovery call. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Learning topic to find resources for
    pub topic: String,

    /// Objective text supplied by the course-planning collaborator, used
    /// only as lexical scoring context
    pub objective: Option<String>,

    /// Maximum number of resources to return
    pub max_results: usize,

    /// Desired content type
    pub content: ContentFilter,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            topic: String::new(),
            objective: None,
            max_results: 5,
            content: ContentFilter::Any,
        }
    }
}

impl SearchQuery {
    /// Create a new query for a topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Set the objective text used as scoring context
    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = Some(objective.into());
        self
    }

    /// Set the maximum number of results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Set the desired content type
    pub fn content(mut self, content: ContentFilter) -> Self {
        self.content = content;
        self
    }

    /// Topic and objective combined, the text quality scoring runs against
    pub fn scoring_text(&self) -> String {
        match &self.objective {
            Some(objective) => format!("{} {}", self.topic, objective),
            None => self.topic.clone(),
        }
    }
}
