//! Keyword-based topic categorization.
//!
//! The detected category selects the scrape-tier site subset and the static
//! fallback catalog. Detection is a pure keyword match over the query topic;
//! no external calls are made.

use serde::{Deserialize, Serialize};

/// Broad category of a learning topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Programming,
    Photography,
    Design,
    General,
}

impl TopicCategory {
    pub fn id(&self) -> &str {
        match self {
            TopicCategory::Programming => "programming",
            TopicCategory::Photography => "photography",
            TopicCategory::Design => "design",
            TopicCategory::General => "general",
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

const PROGRAMMING_MARKERS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "rust",
    "golang",
    "programming",
    "coding",
    "software",
    "web development",
    "backend",
    "frontend",
    "sql",
    "database",
    "machine learning",
    "data science",
    "algorithm",
    "api",
    "devops",
];

const PHOTOGRAPHY_MARKERS: &[&str] = &[
    "photography",
    "photo",
    "camera",
    "lens",
    "portrait",
    "landscape photography",
    "lightroom",
    "exposure",
    "aperture",
];

const DESIGN_MARKERS: &[&str] = &[
    "design",
    "ui",
    "ux",
    "typography",
    "graphic",
    "illustration",
    "figma",
    "branding",
    "color theory",
];

/// Categorize a topic by keyword matching. Falls back to [`TopicCategory::General`]
/// when no marker matches.
pub fn detect_category(topic: &str) -> TopicCategory {
    let topic = topic.to_lowercase();

    if matches_any(&topic, PROGRAMMING_MARKERS) {
        return TopicCategory::Programming;
    }
    if matches_any(&topic, PHOTOGRAPHY_MARKERS) {
        return TopicCategory::Photography;
    }
    if matches_any(&topic, DESIGN_MARKERS) {
        return TopicCategory::Design;
    }

    TopicCategory::General
}

// Multi-word markers match as substrings; single words match on word
// boundaries (prefix allowed, so "cameras" still hits "camera").
fn matches_any(topic: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| {
        if marker.contains(' ') {
            topic.contains(marker)
        } else {
            topic
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word.starts_with(marker))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programming_detection() {
        assert_eq!(detect_category("Python for beginners"), TopicCategory::Programming);
        assert_eq!(detect_category("learn rust"), TopicCategory::Programming);
        assert_eq!(detect_category("SQL databases"), TopicCategory::Programming);
    }

    #[test]
    fn test_photography_detection() {
        assert_eq!(detect_category("portrait photography"), TopicCategory::Photography);
        assert_eq!(detect_category("camera basics"), TopicCategory::Photography);
    }

    #[test]
    fn test_design_detection() {
        assert_eq!(detect_category("UX design principles"), TopicCategory::Design);
        assert_eq!(detect_category("typography"), TopicCategory::Design);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(detect_category("ancient history"), TopicCategory::General);
        assert_eq!(detect_category("spanish"), TopicCategory::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_category("PYTHON"), TopicCategory::Programming);
    }
}
