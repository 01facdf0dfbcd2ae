//! Blocklist matching
//!
//! Matching is case-insensitive substring containment over the whole request
//! URL, not host-label comparison: the pattern `ad.` matches
//! `https://road.example.com/` just as it matches `https://ad.example.com/`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Patterns applied when no custom blocklist is configured.
pub const DEFAULT_BLOCKLIST: &[&str] = &[
    "ads.",
    "doubleclick.net",
    "google-analytics.com",
    "adnxs.com",
    "advertising.com",
    "admob.",
    "ad.",
    "analytics.",
    "tracker.",
    "banner.",
    "popup.",
    "stats.",
    "pixel.",
];

/// Immutable set of blocklist patterns.
///
/// Patterns are lowercased once at construction and only ever compared
/// against a lowercased request URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainMatcher {
    patterns: HashSet<String>,
}

impl DomainMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        Self { patterns }
    }

    /// Returns true iff any configured pattern occurs in the URL.
    pub fn matches(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for DomainMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKLIST.iter().copied())
    }
}
