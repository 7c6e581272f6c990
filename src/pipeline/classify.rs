//! Educational-content classification.
//!
//! Decides whether a raw candidate is worth keeping and, if so, estimates
//! reading time, difficulty, and content type from the title and snippet.
//! Forum and social discussion pages are rejected outright.

use url::Url;

use crate::models::{ClassifiedCandidate, ContentType, Difficulty, RawCandidate};

/// Average adult reading speed used for time estimates
const WORDS_PER_MINUTE: u32 = 200;

const FORUM_MARKERS: &[&str] = &["forum", "discussion", "thread", "q&a"];

const DOCUMENTATION_MARKERS: &[&str] = &["docs", "documentation", "reference"];

const DISCUSSION_HOSTS: &[&str] = &[
    "reddit",
    "stackoverflow",
    "stackexchange",
    "quora",
    "facebook",
    "twitter",
    "x.com",
    "linkedin",
    "pinterest",
    "discord",
];

const BEGINNER_MARKERS: &[&str] = &[
    "beginner",
    "introduction",
    "intro",
    "basics",
    "getting started",
    "first time",
];

const ADVANCED_MARKERS: &[&str] = &["advanced", "expert", "deep dive", "masterclass"];

/// Classify a raw candidate. Returns `None` when the candidate is not
/// educational content (forum threads, social discussion, bare links).
///
/// `site_default` is the content type the producing site predominantly
/// hosts; it wins over text cues unless the URL host itself identifies
/// the kind (a youtube.com link is a video wherever it was found).
pub fn classify(
    candidate: RawCandidate,
    site_default: Option<ContentType>,
) -> Option<ClassifiedCandidate> {
    if candidate.title.is_empty() || candidate.url.is_empty() {
        return None;
    }

    let text = format!("{} {}", candidate.title, candidate.snippet).to_lowercase();
    let url = candidate.url.to_lowercase();

    if has_word_marker(&text, FORUM_MARKERS) || is_discussion_host(&url) {
        return None;
    }

    let reading_minutes = estimate_reading_minutes(&text);
    let difficulty = detect_difficulty(&text);
    let content_type = detect_content_type(&text, &url, site_default);

    Some(ClassifiedCandidate {
        candidate,
        reading_minutes,
        difficulty,
        content_type,
    })
}

// Whole-word match (plural allowed) so "thread" flags "forum threads" but
// not "multithreading". Markers with punctuation ("q&a") match as substrings
// since word splitting would break them apart.
fn has_word_marker(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| {
        if marker.chars().any(|c| !c.is_alphanumeric()) {
            text.contains(marker)
        } else {
            text.split(|c: char| !c.is_alphanumeric())
                .any(|word| word == *marker || word.strip_suffix('s') == Some(marker))
        }
    })
}

// Only the parsed host decides; a path or query merely mentioning a
// discussion site does not reject the candidate
fn is_discussion_host(url: &str) -> bool {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_lowercase(),
            None => return false,
        },
        Err(_) => return false,
    };

    DISCUSSION_HOSTS.iter().any(|marker| {
        if marker.contains('.') {
            host == *marker || host.ends_with(&format!(".{}", marker))
        } else {
            host.split('.').any(|label| label == *marker)
        }
    })
}

fn estimate_reading_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count() as u32;
    (words / WORDS_PER_MINUTE).max(1)
}

fn detect_difficulty(text: &str) -> Difficulty {
    if BEGINNER_MARKERS.iter().any(|m| text.contains(m)) {
        Difficulty::Beginner
    } else if ADVANCED_MARKERS.iter().any(|m| text.contains(m)) {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

fn detect_content_type(text: &str, url: &str, site_default: Option<ContentType>) -> ContentType {
    // The URL host identifies the kind regardless of where the link was found
    if url.contains("youtube.com") || url.contains("youtu.be") || url.contains("vimeo.com") {
        return ContentType::Video;
    }

    if let Some(default) = site_default {
        if default != ContentType::Article {
            return default;
        }
    }

    if text.contains("course") || text.contains("curriculum") || text.contains("certification") {
        ContentType::Course
    } else if text.contains("video") || text.contains("watch") {
        ContentType::Video
    } else if has_word_marker(text, DOCUMENTATION_MARKERS) {
        ContentType::Documentation
    } else {
        ContentType::Article
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, url: &str, snippet: &str) -> RawCandidate {
        RawCandidate::new(title, url, "test", snippet)
    }

    #[test]
    fn test_forum_content_rejected() {
        let c = candidate(
            "Rust forum discussion",
            "https://example.com/t/1",
            "community thread",
        );
        assert!(classify(c, None).is_none());

        let c = candidate(
            "How do I learn Rust?",
            "https://www.reddit.com/r/rust/comments/1",
            "asking for advice",
        );
        assert!(classify(c, None).is_none());
    }

    #[test]
    fn test_threading_topics_are_not_forums() {
        let c = candidate(
            "Multithreading in Rust",
            "https://example.com/threads-guide",
            "spawning threads and sharing state safely",
        );
        let classified = classify(c, None);
        assert!(classified.is_some(), "concurrency tutorials must pass the filter");

        // The plural still flags real forum listings
        let c = candidate(
            "Recent threads",
            "https://example.com/community",
            "browse community threads",
        );
        assert!(classify(c, None).is_none());
    }

    #[test]
    fn test_discussion_match_is_host_only() {
        // Host merely containing a marker as a substring is fine
        let c = candidate("Sphinx docs", "https://sphinx.com/guide", "build docs");
        assert!(classify(c, None).is_some());

        // A path mentioning a discussion site is fine
        let c = candidate(
            "Community tools overview",
            "https://example.com/tools/discord-bots",
            "an overview of chat tooling",
        );
        assert!(classify(c, None).is_some());

        // Exact host and subdomains are rejected
        let c = candidate("Post", "https://x.com/user/status/1", "short post");
        assert!(classify(c, None).is_none());
        let c = candidate(
            "Answer",
            "https://softwareengineering.stackexchange.com/q/1",
            "an answer",
        );
        assert!(classify(c, None).is_none());
    }

    #[test]
    fn test_docs_cue_detected() {
        let c = candidate("Rust API docs", "https://example.com/api", "generated pages");
        let classified = classify(c, None).unwrap();
        assert_eq!(classified.content_type, ContentType::Documentation);

        let c = candidate(
            "Language reference",
            "https://example.com/ref",
            "the reference",
        );
        let classified = classify(c, None).unwrap();
        assert_eq!(classified.content_type, ContentType::Documentation);
    }

    #[test]
    fn test_difficulty_detection() {
        let beginner = classify(
            candidate(
                "Introduction to Python",
                "https://example.com/a",
                "the basics",
            ),
            None,
        )
        .unwrap();
        assert_eq!(beginner.difficulty, Difficulty::Beginner);

        let advanced = classify(
            candidate(
                "Advanced lifetime patterns",
                "https://example.com/b",
                "deep dive",
            ),
            None,
        )
        .unwrap();
        assert_eq!(advanced.difficulty, Difficulty::Advanced);

        let mid = classify(
            candidate("Working with iterators", "https://example.com/c", "patterns"),
            None,
        )
        .unwrap();
        assert_eq!(mid.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_content_type_precedence() {
        // URL host wins over everything
        let video = classify(
            candidate(
                "Rust course overview",
                "https://www.youtube.com/watch?v=1",
                "full course",
            ),
            Some(ContentType::Course),
        )
        .unwrap();
        assert_eq!(video.content_type, ContentType::Video);

        // Non-article site default wins over text cues
        let course = classify(
            candidate("Photography video tips", "https://example.com/c", "watch"),
            Some(ContentType::Course),
        )
        .unwrap();
        assert_eq!(course.content_type, ContentType::Course);

        // Text cues decide for article sites
        let cued = classify(
            candidate(
                "Complete Rust course",
                "https://example.com/d",
                "a curriculum",
            ),
            Some(ContentType::Article),
        )
        .unwrap();
        assert_eq!(cued.content_type, ContentType::Course);

        let plain = classify(
            candidate("Ownership explained", "https://example.com/e", "a guide"),
            None,
        )
        .unwrap();
        assert_eq!(plain.content_type, ContentType::Article);
    }

    #[test]
    fn test_reading_minutes_floor() {
        let short = classify(candidate("Tiny", "https://example.com/t", "two words"), None).unwrap();
        assert_eq!(short.reading_minutes, 1);
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(classify(candidate("", "https://example.com", "s"), None).is_none());
        assert!(classify(candidate("Title", "", "s"), None).is_none());
    }
}
