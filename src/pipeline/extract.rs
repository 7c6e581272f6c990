//! Candidate extraction from fetched HTML.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use crate::models::RawCandidate;
use crate::sites::SiteRules;

/// Cap per site so one site cannot flood the candidate pool
const MAX_PER_SITE: usize = 10;

/// Snippets are clipped to this many characters
const SNIPPET_LIMIT: usize = 200;

/// Extract raw candidates from a search results page using a site's rules.
///
/// Extraction never fails: unparsable selectors or markup that no longer
/// matches simply yield an empty list, and the caller moves on to the next
/// site. Synchronous on purpose so the parsed document never crosses an
/// await point.
pub fn extract(rules: &SiteRules, body: &str) -> Vec<RawCandidate> {
    let (container, title, link, snippet) = match parse_selectors(rules) {
        Some(selectors) => selectors,
        None => {
            warn!("Invalid selectors for site {}", rules.id);
            return Vec::new();
        }
    };

    let document = Html::parse_document(body);
    let mut candidates = Vec::new();

    for element in document.select(&container).take(MAX_PER_SITE) {
        let title_text = element
            .select(&title)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let href = element
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| absolutize(&rules.base, href));

        let snippet_text = element
            .select(&snippet)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let (title_text, href) = match (title_text, href) {
            (t, Some(h)) if !t.is_empty() && !h.is_empty() => (t, h),
            _ => continue,
        };

        candidates.push(
            RawCandidate::new(title_text, href, rules.id.clone(), clip(&snippet_text))
                .with_html(element.html()),
        );
    }

    candidates
}

fn parse_selectors(rules: &SiteRules) -> Option<(Selector, Selector, Selector, Selector)> {
    Some((
        Selector::parse(&rules.container).ok()?,
        Selector::parse(&rules.title).ok()?,
        Selector::parse(&rules.link).ok()?,
        Selector::parse(&rules.snippet).ok()?,
    ))
}

/// Collect an element's text with whitespace collapsed
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a possibly-relative href against the site's base URL
fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => String::new(),
    }
}

fn clip(snippet: &str) -> String {
    if snippet.chars().count() <= SNIPPET_LIMIT {
        return snippet.to_string();
    }
    let clipped: String = snippet.chars().take(SNIPPET_LIMIT).collect();
    format!("{}...", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::SiteRules;

    fn rules() -> SiteRules {
        SiteRules::new(
            "test",
            "Test Site",
            "https://example.com",
            "https://example.com/search?q={query}",
        )
        .selectors("article", "h2", "a", "p")
    }

    #[test]
    fn test_extracts_candidates() {
        let body = r#"
            <html><body>
              <article>
                <h2>Learning Rust</h2>
                <a href="/posts/learning-rust">read</a>
                <p>A  guide to
                   the basics.</p>
              </article>
              <article>
                <h2>Async Rust</h2>
                <a href="https://other.com/async">read</a>
                <p>Futures and executors.</p>
              </article>
            </body></html>
        "#;

        let candidates = extract(&rules(), body);
        assert_eq!(candidates.len(), 2);

        assert_eq!(candidates[0].title, "Learning Rust");
        assert_eq!(candidates[0].url, "https://example.com/posts/learning-rust");
        assert_eq!(candidates[0].site, "test");
        assert_eq!(candidates[0].snippet, "A guide to the basics.");
        assert!(candidates[0].html.is_some());

        assert_eq!(candidates[1].url, "https://other.com/async");
    }

    #[test]
    fn test_skips_incomplete_entries() {
        let body = r#"
            <article><h2>No link here</h2><p>text</p></article>
            <article><a href="/only-link">x</a></article>
            <article><h2>Complete</h2><a href="/ok">x</a></article>
        "#;

        let candidates = extract(&rules(), body);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Complete");
    }

    #[test]
    fn test_caps_results_per_site() {
        let mut body = String::new();
        for i in 0..25 {
            body.push_str(&format!(
                "<article><h2>Post {}</h2><a href=\"/p/{}\">x</a><p>s</p></article>",
                i, i
            ));
        }

        let candidates = extract(&rules(), &body);
        assert_eq!(candidates.len(), MAX_PER_SITE);
    }

    #[test]
    fn test_invalid_selector_yields_empty() {
        let bad = rules().selectors(":::nope", "h2", "a", "p");
        assert!(extract(&bad, "<article><h2>t</h2></article>").is_empty());
    }

    #[test]
    fn test_snippet_clipped() {
        let long = "word ".repeat(100);
        let body = format!(
            "<article><h2>T</h2><a href=\"/p\">x</a><p>{}</p></article>",
            long
        );

        let candidates = extract(&rules(), &body);
        assert_eq!(candidates.len(), 1);
        let snippet = &candidates[0].snippet;
        assert!(snippet.ends_with("..."));
        assert!(snippet.chars().count() <= SNIPPET_LIMIT + 3);
    }
}
