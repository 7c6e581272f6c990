//! Quality scoring and ranking.
//!
//! A score in `[0.0, 1.0]` combines lexical overlap with the query, a
//! per-site trust weight, and a comprehensiveness bonus. Ranking is a
//! deterministic sort on score with trust and brevity as tie-breakers.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::models::{ClassifiedCandidate, ContentType, ScoredResource};

const OVERLAP_WEIGHT: f64 = 0.5;
const TRUST_WEIGHT: f64 = 0.35;
const COMPREHENSIVE_WEIGHT: f64 = 0.15;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "are", "was", "were", "will", "have",
    "has", "had", "not", "but", "can", "could", "should", "would", "about", "into", "over",
    "under", "how", "what", "when", "where", "why", "you", "your",
];

const COMPREHENSIVE_MARKERS: &[&str] = &[
    "complete",
    "comprehensive",
    "ultimate",
    "full",
    "master",
    "curriculum",
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z0-9]+").expect("valid token pattern"))
}

fn tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() > 2 && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// Fraction of the query's terms that appear in the candidate's text
pub(crate) fn lexical_overlap(query_text: &str, candidate_text: &str) -> f64 {
    let query_terms: HashSet<String> = tokens(query_text).into_iter().collect();
    if query_terms.is_empty() {
        return 0.0;
    }

    let candidate_terms: HashSet<String> = tokens(candidate_text).into_iter().collect();
    let matched = query_terms.intersection(&candidate_terms).count();
    matched as f64 / query_terms.len() as f64
}

/// Editorial trust weight for a producing site or host
pub(crate) fn site_trust_weight(site: &str) -> f64 {
    let site = site.to_lowercase();

    const WEIGHTS: &[(&str, f64)] = &[
        ("khanacademy", 0.95),
        ("khan_academy", 0.95),
        ("freecodecamp", 0.9),
        ("coursera", 0.9),
        ("edx", 0.9),
        ("wikipedia", 0.85),
        ("ted_ed", 0.85),
        ("ted.com", 0.85),
        ("realpython", 0.8),
        ("real_python", 0.8),
        ("css_tricks", 0.75),
        ("css-tricks", 0.75),
        ("smashing", 0.75),
        ("alistapart", 0.75),
        ("petapixel", 0.7),
        ("dev_to", 0.65),
        ("dev.to", 0.65),
        ("youtube", 0.6),
        ("medium", 0.6),
    ];

    for (marker, weight) in WEIGHTS {
        if site.contains(marker) {
            return *weight;
        }
    }
    0.5
}

fn comprehensiveness_bonus(classified: &ClassifiedCandidate) -> f64 {
    if classified.content_type == ContentType::Course {
        return 1.0;
    }
    let text = format!(
        "{} {}",
        classified.candidate.title, classified.candidate.snippet
    )
    .to_lowercase();
    if COMPREHENSIVE_MARKERS.iter().any(|m| text.contains(m)) {
        1.0
    } else {
        0.0
    }
}

/// Score a classified candidate against the query's scoring text
pub fn score(classified: ClassifiedCandidate, query_text: &str) -> ScoredResource {
    let candidate_text = format!(
        "{} {}",
        classified.candidate.title, classified.candidate.snippet
    );

    let overlap = lexical_overlap(query_text, &candidate_text);
    let trust = site_trust_weight(&classified.candidate.site);
    let bonus = comprehensiveness_bonus(&classified);

    let total = OVERLAP_WEIGHT * overlap + TRUST_WEIGHT * trust + COMPREHENSIVE_WEIGHT * bonus;
    ScoredResource::from_classified(classified, total)
}

/// Sort resources by descending score; ties break on site trust, then on
/// shorter reading time. Deterministic for any input order.
pub fn rank(resources: &mut [ScoredResource]) {
    resources.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| {
                site_trust_weight(&b.site).total_cmp(&site_trust_weight(&a.site))
            })
            .then_with(|| a.reading_minutes.cmp(&b.reading_minutes))
    });
}
