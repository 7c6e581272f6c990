//! Resource models representing candidates as they move through the pipeline.

use serde::{Deserialize, Serialize};

/// Difficulty label assigned by the content classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns the display name of the difficulty level
    pub fn name(&self) -> &str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of educational content a resource holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Course,
    Video,
    Documentation,
}

impl ContentType {
    pub fn name(&self) -> &str {
        match self {
            ContentType::Article => "article",
            ContentType::Course => "course",
            ContentType::Video => "video",
            ContentType::Documentation => "documentation",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The fallback tier that satisfied a discovery call.
///
/// Surfaced on every [`ResourceSet`] so callers can tell users where the
/// results came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Primary search API answered the query.
    Api,
    /// Results were scraped from the educational site catalog.
    Scrape,
    /// Built-in curated resources, the final fallback.
    Static,
}

impl Tier {
    pub fn id(&self) -> &str {
        match self {
            Tier::Api => "api",
            Tier::Scrape => "scrape",
            Tier::Static => "static",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// An unscored, unfiltered extraction result.
///
/// Produced by a site extractor or the primary API adapter; never mutated
/// afterwards. Candidates that fail classification are dropped here and
/// never become a [`ScoredResource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCandidate {
    /// Resource title as found on the page or in the API result
    pub title: String,

    /// Absolute URL of the resource
    pub url: String,

    /// Identifier of the site that produced this candidate (catalog id for
    /// scraped results, URL host for API results)
    pub site: String,

    /// Snippet or summary text
    pub snippet: String,

    /// Raw HTML fragment the candidate was extracted from, when available
    pub html: Option<String>,
}

impl RawCandidate {
    /// Create a candidate with the required fields
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        site: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            site: site.into(),
            snippet: snippet.into(),
            html: None,
        }
    }

    /// Attach the raw HTML fragment this candidate came from
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// A candidate that passed the educational-content filter, with the
/// classifier's estimates attached. Input to the quality scorer.
#[derive(Debug, Clone)]
pub struct ClassifiedCandidate {
    pub candidate: RawCandidate,
    pub reading_minutes: u32,
    pub difficulty: Difficulty,
    pub content_type: ContentType,
}

/// A fully classified and quality-scored resource. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResource {
    pub title: String,
    pub url: String,
    pub site: String,
    pub snippet: String,

    /// Quality score in `[0.0, 1.0]`, used for ranking
    pub score: f64,

    /// Estimated reading/viewing time in minutes
    pub reading_minutes: u32,

    pub difficulty: Difficulty,
    pub content_type: ContentType,
}

impl ScoredResource {
    /// Build a scored resource from a classified candidate. The score is
    /// clamped into `[0.0, 1.0]`.
    pub fn from_classified(classified: ClassifiedCandidate, score: f64) -> Self {
        let ClassifiedCandidate {
            candidate,
            reading_minutes,
            difficulty,
            content_type,
        } = classified;
        Self {
            title: candidate.title,
            url: candidate.url,
            site: candidate.site,
            snippet: candidate.snippet,
            score: score.clamp(0.0, 1.0),
            reading_minutes,
            difficulty,
            content_type,
        }
    }
}

/// The result of one discovery call: deduplicated resources ordered by
/// descending score, truncated to the requested count, tagged with the
/// tier that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSet {
    /// Topic the discovery call was made for
    pub topic: String,

    /// Which fallback tier satisfied the request
    pub tier: Tier,

    /// Ranked resources, scores non-increasing
    pub resources: Vec<ScoredResource>,
}

impl ResourceSet {
    pub fn new(topic: impl Into<String>, tier: Tier, resources: Vec<ScoredResource>) -> Self {
        Self {
            topic: topic.into(),
            tier,
            resources,
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredResource> {
        self.resources.iter()
    }
}
