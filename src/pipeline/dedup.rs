//! Duplicate collapsing across sites.
//!
//! Two resources are duplicates when their normalized URLs match or their
//! normalized titles match (exactly or by high string similarity). The
//! higher-scored variant survives; on equal scores the first seen wins,
//! which keeps the pass idempotent and order-stable.

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::ScoredResource;

const TITLE_SIMILARITY_THRESHOLD: f64 = 0.95;

/// Canonical form of a URL for duplicate detection: lowercase host without
/// `www.`, path without a trailing slash, query and fragment dropped.
pub(crate) fn normalize_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let host = parsed
            .host_str()
            .unwrap_or("")
            .to_lowercase()
            .trim_start_matches("www.")
            .to_string();
        let path = parsed.path().trim_end_matches('/');
        return format!("{}{}", host, path);
    }

    // Unparsable URLs still normalize consistently
    url.trim()
        .to_lowercase()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/')
        .to_string()
}

/// Canonical form of a title: alphanumeric words, lowercased, single-spaced
pub(crate) fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Collapse duplicates, keeping the higher-scored variant of each group.
///
/// Running the pass twice gives the same result as running it once.
pub fn dedupe(resources: Vec<ScoredResource>) -> Vec<ScoredResource> {
    let mut slots: Vec<Option<ScoredResource>> = Vec::new();
    let mut by_url: HashMap<String, usize> = HashMap::new();
    let mut by_title: HashMap<String, usize> = HashMap::new();

    for resource in resources {
        let url_key = normalize_url(&resource.url);
        let title_key = normalize_title(&resource.title);

        let existing = by_url
            .get(&url_key)
            .or_else(|| by_title.get(&title_key))
            .copied()
            .or_else(|| near_title_slot(&by_title, &title_key));

        match existing {
            Some(slot) => {
                let keep_new = slots[slot]
                    .as_ref()
                    .map(|held| resource.score > held.score)
                    .unwrap_or(true);
                if keep_new {
                    slots[slot] = Some(resource);
                }
                // Both variants' keys point at the surviving slot
                by_url.entry(url_key).or_insert(slot);
                by_title.entry(title_key).or_insert(slot);
            }
            None => {
                let slot = slots.len();
                slots.push(Some(resource));
                by_url.insert(url_key, slot);
                by_title.insert(title_key, slot);
            }
        }
    }

    slots.into_iter().flatten().collect()
}

fn near_title_slot(by_title: &HashMap<String, usize>, title_key: &str) -> Option<usize> {
    if title_key.is_empty() {
        return None;
    }
    by_title
        .iter()
        .find(|(seen, _)| jaro_winkler(seen, title_key) >= TITLE_SIMILARITY_THRESHOLD)
        .map(|(_, slot)| *slot)
}
