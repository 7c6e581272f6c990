//! Built-in site catalog.
//!
//! Sites are listed in scrape-tier preference order. Selectors track the
//! markup of each site's search results page and need occasional upkeep
//! when a site redesigns.

use super::SiteRules;
use crate::models::ContentType;
use crate::topic::TopicCategory;

pub(super) fn all() -> Vec<SiteRules> {
    vec![
        SiteRules::new(
            "freecodecamp",
            "freeCodeCamp",
            "https://www.freecodecamp.org",
            "https://www.freecodecamp.org/news/search/?query={query}",
        )
        .selectors(
            "article.post-card",
            "h2.post-card-title",
            "a.post-card-content-link",
            "section.post-card-excerpt",
        )
        .categories(&[TopicCategory::Programming]),
        SiteRules::new(
            "dev_to",
            "DEV Community",
            "https://dev.to",
            "https://dev.to/search?q={query}",
        )
        .selectors(
            ".crayons-story",
            "a.crayons-story__title",
            "a.crayons-story__title",
            ".crayons-story__snippet",
        )
        .categories(&[TopicCategory::Programming]),
        SiteRules::new(
            "medium",
            "Medium",
            "https://medium.com",
            "https://medium.com/search?q={query}",
        )
        .selectors("article", "h2", "article a", "article p"),
        SiteRules::new(
            "css_tricks",
            "CSS-Tricks",
            "https://css-tricks.com",
            "https://css-tricks.com/?s={query}",
        )
        .selectors(
            "article.article-card",
            "h2.article-article-link",
            "h2.article-article-link a",
            ".article-content p",
        )
        .categories(&[TopicCategory::Programming, TopicCategory::Design]),
        SiteRules::new(
            "smashing",
            "Smashing Magazine",
            "https://www.smashingmagazine.com",
            "https://www.smashingmagazine.com/search/?q={query}",
        )
        .selectors(
            "article.article--post",
            "h2.article--post__title",
            "h2.article--post__title a",
            ".article--post__teaser",
        )
        .categories(&[TopicCategory::Design, TopicCategory::Programming]),
        SiteRules::new(
            "khan_academy",
            "Khan Academy",
            "https://www.khanacademy.org",
            "https://www.khanacademy.org/search?page_search_query={query}",
        )
        .selectors(
            "[data-testid=\"search-result\"]",
            "[data-testid=\"search-result-title\"]",
            "a",
            "[data-testid=\"search-result-description\"]",
        )
        .default_type(ContentType::Course),
        SiteRules::new(
            "youtube",
            "YouTube",
            "https://www.youtube.com",
            "https://www.youtube.com/results?search_query={query}",
        )
        .selectors(
            "ytd-video-renderer",
            "#video-title",
            "a#video-title",
            "#description-text",
        )
        .default_type(ContentType::Video),
        SiteRules::new(
            "wikipedia",
            "Wikipedia",
            "https://en.wikipedia.org",
            "https://en.wikipedia.org/w/index.php?search={query}&ns0=1",
        )
        .selectors(
            ".mw-search-result",
            ".mw-search-result-heading",
            ".mw-search-result-heading a",
            ".searchresult",
        )
        .default_type(ContentType::Documentation),
        SiteRules::new(
            "coursera",
            "Coursera",
            "https://www.coursera.org",
            "https://www.coursera.org/search?query={query}",
        )
        .selectors(
            "[data-testid=\"product-card\"]",
            "h3",
            "a",
            ".cds-ProductCard-body",
        )
        .default_type(ContentType::Course),
        SiteRules::new(
            "ted_ed",
            "TED-Ed",
            "https://ed.ted.com",
            "https://ed.ted.com/search?qs={query}",
        )
        .selectors(
            ".search-result",
            ".search-result__title",
            ".search-result__title a",
            ".search-result__description",
        )
        .default_type(ContentType::Video),
        SiteRules::new(
            "edx",
            "edX",
            "https://www.edx.org",
            "https://www.edx.org/search?q={query}",
        )
        .selectors(
            ".discovery-card",
            ".discovery-card-title",
            "a.discovery-card-link",
            ".discovery-card-description",
        )
        .default_type(ContentType::Course),
        SiteRules::new(
            "real_python",
            "Real Python",
            "https://realpython.com",
            "https://realpython.com/search?q={query}",
        )
        .selectors(
            ".card",
            ".card-title",
            ".card a",
            ".card-text",
        )
        .categories(&[TopicCategory::Programming]),
        SiteRules::new(
            "petapixel",
            "PetaPixel",
            "https://petapixel.com",
            "https://petapixel.com/?s={query}",
        )
        .selectors(
            "article.post",
            "h2.entry-title",
            "h2.entry-title a",
            ".entry-summary",
        )
        .categories(&[TopicCategory::Photography]),
        SiteRules::new(
            "alistapart",
            "A List Apart",
            "https://alistapart.com",
            "https://alistapart.com/?s={query}",
        )
        .selectors(
            "article.entry",
            "h2.entry-title",
            "h2.entry-title a",
            ".entry-summary",
        )
        .categories(&[TopicCategory::Design]),
    ]
}
