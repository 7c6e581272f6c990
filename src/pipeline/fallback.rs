//! Curated static fallback catalog, the last tier.
//!
//! These entries are hand-picked evergreen starting points per topic
//! category. They carry a fixed mid-range score since no query-specific
//! signal exists for them.

use crate::models::{ContentType, Difficulty, ScoredResource};
use crate::topic::TopicCategory;

/// Fixed score for curated entries
const STATIC_SCORE: f64 = 0.5;

struct StaticEntry {
    title: &'static str,
    url: &'static str,
    site: &'static str,
    snippet: &'static str,
    content_type: ContentType,
    reading_minutes: u32,
}

const PROGRAMMING: &[StaticEntry] = &[
    StaticEntry {
        title: "freeCodeCamp Curriculum",
        url: "https://www.freecodecamp.org/learn/",
        site: "freecodecamp",
        snippet: "Free self-paced certifications covering web development, \
                  JavaScript, Python, and data science.",
        content_type: ContentType::Course,
        reading_minutes: 30,
    },
    StaticEntry {
        title: "MDN Web Docs: Learn Web Development",
        url: "https://developer.mozilla.org/en-US/docs/Learn",
        site: "mdn",
        snippet: "Structured guides to HTML, CSS, and JavaScript from Mozilla.",
        content_type: ContentType::Documentation,
        reading_minutes: 20,
    },
    StaticEntry {
        title: "The Odin Project",
        url: "https://www.theodinproject.com/",
        site: "odin_project",
        snippet: "A free full-stack curriculum built on open resources and projects.",
        content_type: ContentType::Course,
        reading_minutes: 30,
    },
];

const PHOTOGRAPHY: &[StaticEntry] = &[
    StaticEntry {
        title: "Photography Basics and Beyond",
        url: "https://www.coursera.org/specializations/photography-basics",
        site: "coursera",
        snippet: "A beginner-to-advanced photography specialization from \
                  Michigan State University.",
        content_type: ContentType::Course,
        reading_minutes: 45,
    },
    StaticEntry {
        title: "Cambridge in Colour Tutorials",
        url: "https://www.cambridgeincolour.com/learn-photography-concepts.htm",
        site: "cambridgeincolour",
        snippet: "In-depth tutorials on exposure, optics, and post-processing.",
        content_type: ContentType::Article,
        reading_minutes: 15,
    },
    StaticEntry {
        title: "PetaPixel Guides",
        url: "https://petapixel.com/guides/",
        site: "petapixel",
        snippet: "Practical gear and technique guides for photographers.",
        content_type: ContentType::Article,
        reading_minutes: 12,
    },
];

const DESIGN: &[StaticEntry] = &[
    StaticEntry {
        title: "Hack Design",
        url: "https://hackdesign.org/lessons",
        site: "hackdesign",
        snippet: "A design curriculum of weekly lessons curated by industry designers.",
        content_type: ContentType::Course,
        reading_minutes: 20,
    },
    StaticEntry {
        title: "Google UX Design Certificate",
        url: "https://www.coursera.org/professional-certificates/google-ux-design",
        site: "coursera",
        snippet: "A beginner professional certificate covering the UX design process.",
        content_type: ContentType::Course,
        reading_minutes: 45,
    },
    StaticEntry {
        title: "A List Apart Articles",
        url: "https://alistapart.com/articles/",
        site: "alistapart",
        snippet: "Essays on web design, standards, and practice.",
        content_type: ContentType::Article,
        reading_minutes: 10,
    },
];

/// Curated resources for a category, truncated to `max`.
///
/// The general catalog interpolates the topic into platform search links,
/// so even unknown topics get usable starting points. Never returns an
/// empty list for `max > 0`.
pub fn static_resources(category: TopicCategory, topic: &str, max: usize) -> Vec<ScoredResource> {
    let mut resources: Vec<ScoredResource> = match category {
        TopicCategory::Programming => PROGRAMMING.iter().map(from_entry).collect(),
        TopicCategory::Photography => PHOTOGRAPHY.iter().map(from_entry).collect(),
        TopicCategory::Design => DESIGN.iter().map(from_entry).collect(),
        TopicCategory::General => general_resources(topic),
    };
    resources.truncate(max);
    resources
}

fn from_entry(entry: &StaticEntry) -> ScoredResource {
    ScoredResource {
        title: entry.title.to_string(),
        url: entry.url.to_string(),
        site: entry.site.to_string(),
        snippet: entry.snippet.to_string(),
        score: STATIC_SCORE,
        reading_minutes: entry.reading_minutes,
        difficulty: Difficulty::Beginner,
        content_type: entry.content_type,
    }
}

fn general_resources(topic: &str) -> Vec<ScoredResource> {
    let encoded = urlencoding::encode(topic);

    let links = [
        (
            format!("Coursera courses on {}", topic),
            format!("https://www.coursera.org/search?query={}", encoded),
            "coursera",
            ContentType::Course,
        ),
        (
            format!("edX courses on {}", topic),
            format!("https://www.edx.org/search?q={}", encoded),
            "edx",
            ContentType::Course,
        ),
        (
            format!("Khan Academy: {}", topic),
            format!(
                "https://www.khanacademy.org/search?page_search_query={}",
                encoded
            ),
            "khan_academy",
            ContentType::Course,
        ),
    ];

    links
        .into_iter()
        .map(|(title, url, site, content_type)| ScoredResource {
            title,
            url,
            site: site.to_string(),
            snippet: format!("Curated starting point for learning {}", topic),
            score: STATIC_SCORE,
            reading_minutes: 30,
            difficulty: Difficulty::Beginner,
            content_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_non_empty() {
        for category in [
            TopicCategory::Programming,
            TopicCategory::Photography,
            TopicCategory::Design,
            TopicCategory::General,
        ] {
            let resources = static_resources(category, "anything", 5);
            assert!(!resources.is_empty(), "{} catalog is empty", category);
            for r in &resources {
                assert_eq!(r.score, STATIC_SCORE);
                assert!(!r.url.is_empty());
            }
        }
    }

    #[test]
    fn test_truncated_to_max() {
        assert_eq!(
            static_resources(TopicCategory::Programming, "rust", 2).len(),
            2
        );
    }

    #[test]
    fn test_general_interpolates_topic() {
        let resources = static_resources(TopicCategory::General, "ancient history", 5);
        assert!(resources[0].url.contains("ancient%20history"));
        assert!(resources[0].title.contains("ancient history"));
    }
}
