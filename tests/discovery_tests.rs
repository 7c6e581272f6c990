//! Integration tests for the discovery engine.
//!
//! These drive the full tier ladder end to end: scripted API outcomes via
//! the mock adapter, scrape-tier behavior against local HTTP stubs, and
//! degradation to the static catalog.

use std::sync::Arc;
use std::time::{Duration, Instant};

use eduscout::api::{make_candidate, MockOutcome, MockSearchApi};
use eduscout::config::DiscoveryConfig;
use eduscout::models::ContentType;
use eduscout::pipeline::dedupe;
use eduscout::topic::TopicCategory;
use eduscout::{ContentFilter, Discovery, ScoredResource, SearchQuery, SiteRegistry, SiteRules, Tier};

// RUST_LOG=debug makes failing runs show the tier transitions
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mock_api(outcome: MockOutcome) -> Arc<MockSearchApi> {
    let api = MockSearchApi::new();
    api.set_outcome(outcome);
    Arc::new(api)
}

fn fast_config() -> DiscoveryConfig {
    init_logging();
    let mut config = DiscoveryConfig::default();
    config.rate_limit.cooldown_ms = 0;
    config
}

/// Rules pointing at a local stub server
fn stub_site(id: &str, base: &str) -> SiteRules {
    SiteRules::new(
        id,
        "Stub Site",
        base,
        format!("{}/search?q={{query}}", base),
    )
    .selectors("article", "h2", "a", "p")
}

fn results_page(posts: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("<html><body>");
    for (title, path, snippet) in posts {
        body.push_str(&format!(
            "<article><h2>{}</h2><a href=\"{}\">read</a><p>{}</p></article>",
            title, path, snippet
        ));
    }
    body.push_str("</body></html>");
    body
}

#[tokio::test]
async fn api_tier_produces_ranked_bounded_results() {
    let api = mock_api(MockOutcome::Candidates(vec![
        make_candidate("Rust Ownership Complete Guide", "https://example.com/own"),
        make_candidate("Gardening Notes", "https://example.com/garden"),
        make_candidate("Rust Ownership Explained", "https://example.org/own"),
        make_candidate("Borrow Checker Patterns In Rust", "https://example.com/borrow"),
    ]));
    let engine = Discovery::with_parts(fast_config(), Some(api), SiteRegistry::with_rules(vec![]));

    let query = SearchQuery::new("rust ownership").max_results(3);
    let set = engine.discover(&query).await;

    assert_eq!(set.tier, Tier::Api);
    assert!(set.len() <= 3);
    assert!(!set.is_empty());
    for pair in set.resources.windows(2) {
        assert!(pair[0].score >= pair[1].score, "scores must be non-increasing");
    }
}

#[tokio::test]
async fn rate_limited_api_falls_back_to_scraping() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex(r"^/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[
            ("Spanish Grammar Basics", "/grammar", "an introduction to spanish grammar"),
            ("Spanish Vocabulary Guide", "/vocab", "common words for learners of spanish"),
        ]))
        .create_async()
        .await;

    let sites = SiteRegistry::with_rules(vec![stub_site("stub", &server.url())]);
    let engine = Discovery::with_parts(
        fast_config(),
        Some(mock_api(MockOutcome::RateLimited)),
        sites,
    );

    let set = engine.discover(&SearchQuery::new("spanish")).await;
    assert_eq!(set.tier, Tier::Scrape);
    assert_eq!(set.len(), 2);
    assert_eq!(set.resources[0].site, "stub");
}

#[tokio::test]
async fn rate_limited_fallback_scrapes_only_the_relevant_category() {
    let mut server = mockito::Server::new_async().await;
    let photo = server
        .mock("GET", mockito::Matcher::Regex(r"^/photo/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[(
            "Portrait Lighting Basics",
            "/lighting",
            "an introduction to portrait lighting",
        )]))
        .create_async()
        .await;
    let code = server
        .mock("GET", mockito::Matcher::Regex(r"^/code/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[(
            "Rust Iterators",
            "/iterators",
            "iterator adapters explained",
        )]))
        .expect(0)
        .create_async()
        .await;

    let sites = SiteRegistry::with_rules(vec![
        stub_site("code_site", &format!("{}/code", server.url()))
            .categories(&[TopicCategory::Programming]),
        stub_site("photo_site", &format!("{}/photo", server.url()))
            .categories(&[TopicCategory::Photography]),
    ]);
    let engine = Discovery::with_parts(
        fast_config(),
        Some(mock_api(MockOutcome::RateLimited)),
        sites,
    );

    let set = engine.discover(&SearchQuery::new("photography")).await;

    photo.assert_async().await;
    code.assert_async().await;
    assert_eq!(set.tier, Tier::Scrape);
    assert_eq!(set.len(), 1);
    assert_eq!(set.resources[0].site, "photo_site");
}

#[tokio::test]
async fn total_outage_degrades_to_static_catalog() {
    // API errors out and the one scrape site is down
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Regex(r"^/search.*$".to_string()))
        .with_status(503)
        .create_async()
        .await;

    let sites = SiteRegistry::with_rules(vec![stub_site("down", &server.url())]);
    let engine = Discovery::with_parts(
        fast_config(),
        Some(mock_api(MockOutcome::Unavailable)),
        sites,
    );

    let set = engine.discover(&SearchQuery::new("python")).await;
    assert_eq!(set.tier, Tier::Static);
    assert!(!set.is_empty(), "static catalog must always answer");
}

#[tokio::test]
async fn forum_content_never_reaches_results() {
    let api = mock_api(MockOutcome::Candidates(vec![
        make_candidate("Rust forum discussion thread", "https://example.com/t/1"),
        make_candidate("Help me learn rust", "https://www.reddit.com/r/rust/1"),
        make_candidate("Rust Ownership Guide", "https://example.com/guide"),
    ]));
    let engine = Discovery::with_parts(fast_config(), Some(api), SiteRegistry::with_rules(vec![]));

    let set = engine.discover(&SearchQuery::new("rust")).await;
    assert_eq!(set.len(), 1);
    assert_eq!(set.resources[0].title, "Rust Ownership Guide");
}

#[tokio::test]
async fn duplicate_urls_collapse_across_sources() {
    let api = mock_api(MockOutcome::Candidates(vec![
        make_candidate("Rust Guide", "https://www.example.com/guide/"),
        make_candidate("Rust Guide", "https://example.com/guide"),
        make_candidate("Another Rust Resource", "https://example.com/other"),
    ]));
    let engine = Discovery::with_parts(fast_config(), Some(api), SiteRegistry::with_rules(vec![]));

    let set = engine.discover(&SearchQuery::new("rust")).await;
    assert_eq!(set.len(), 2, "www/trailing-slash variants are one resource");
}

#[tokio::test]
async fn dedupe_is_idempotent_over_engine_output() {
    let api = mock_api(MockOutcome::Candidates(vec![
        make_candidate("Rust Guide", "https://example.com/guide"),
        make_candidate("Rust Guide", "https://mirror.net/guide"),
        make_candidate("Iterators In Depth", "https://example.com/iter"),
    ]));
    let engine = Discovery::with_parts(fast_config(), Some(api), SiteRegistry::with_rules(vec![]));

    let set = engine.discover(&SearchQuery::new("rust")).await;
    let again: Vec<ScoredResource> = dedupe(set.resources.clone());
    assert_eq!(set.resources.len(), again.len());
}

#[tokio::test]
async fn content_filter_restricts_types() {
    let api = mock_api(MockOutcome::Candidates(vec![
        make_candidate("Rust Video Walkthrough", "https://www.youtube.com/watch?v=1"),
        make_candidate("Rust Written Guide", "https://example.com/guide"),
    ]));
    let engine = Discovery::with_parts(fast_config(), Some(api), SiteRegistry::with_rules(vec![]));

    let query = SearchQuery::new("rust").content(ContentFilter::Video);
    let set = engine.discover(&query).await;

    assert_eq!(set.len(), 1);
    assert_eq!(set.resources[0].content_type, ContentType::Video);
}

#[tokio::test]
async fn scrape_tier_spaces_out_site_fetches() {
    let mut server = mockito::Server::new_async().await;
    // Two sites on the same stub server, each returning one unique post so
    // the engine keeps fetching
    server
        .mock("GET", mockito::Matcher::Regex(r"^/a/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[(
            "Spanish Grammar Basics",
            "/grammar",
            "introduction to grammar",
        )]))
        .create_async()
        .await;
    server
        .mock("GET", mockito::Matcher::Regex(r"^/b/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[(
            "Spanish Vocabulary Guide",
            "/vocab",
            "common words for learners",
        )]))
        .create_async()
        .await;

    let mut config = DiscoveryConfig::default();
    config.rate_limit.cooldown_ms = 300;

    let sites = SiteRegistry::with_rules(vec![
        stub_site("site_a", &format!("{}/a", server.url())),
        stub_site("site_b", &format!("{}/b", server.url())),
    ]);
    let engine = Discovery::with_parts(config, None, sites);

    let start = Instant::now();
    let set = engine
        .discover(&SearchQuery::new("spanish").max_results(5))
        .await;
    let elapsed = start.elapsed();

    assert_eq!(set.tier, Tier::Scrape);
    assert_eq!(set.len(), 2);
    assert!(
        elapsed >= Duration::from_millis(300),
        "second site fetch should wait out the cooldown, elapsed {:?}",
        elapsed
    );
}

#[tokio::test]
async fn scrape_stops_once_enough_results_gathered() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", mockito::Matcher::Regex(r"^/a/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[
            ("Spanish Grammar Basics", "/grammar", "introduction to grammar"),
            ("Spanish Vocabulary Guide", "/vocab", "common words for learners"),
        ]))
        .create_async()
        .await;
    let second = server
        .mock("GET", mockito::Matcher::Regex(r"^/b/search.*$".to_string()))
        .with_status(200)
        .with_body(results_page(&[(
            "Spanish Listening Practice",
            "/listen",
            "audio for learners",
        )]))
        .expect(0)
        .create_async()
        .await;

    let sites = SiteRegistry::with_rules(vec![
        stub_site("site_a", &format!("{}/a", server.url())),
        stub_site("site_b", &format!("{}/b", server.url())),
    ]);
    let engine = Discovery::with_parts(fast_config(), None, sites);

    let set = engine
        .discover(&SearchQuery::new("spanish").max_results(2))
        .await;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(set.len(), 2);
}

#[tokio::test]
async fn empty_api_answer_falls_through_to_static() {
    // API succeeds but returns nothing useful; no scrape sites configured
    let engine = Discovery::with_parts(
        fast_config(),
        Some(mock_api(MockOutcome::Candidates(vec![]))),
        SiteRegistry::with_rules(vec![]),
    );

    let set = engine.discover(&SearchQuery::new("ancient history")).await;
    assert_eq!(set.tier, Tier::Static);
    assert!(!set.is_empty());
}
