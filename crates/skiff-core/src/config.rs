//! Shell configuration

use serde::{Deserialize, Serialize};

use skiff_filter::DEFAULT_BLOCKLIST;
use skiff_session::DEFAULT_SEARCH_TEMPLATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL loaded by new tabs when none is given.
    pub homepage: String,
    /// Search provider template; `%s` is replaced by the encoded query.
    pub search_engine: String,
    /// Whether request filtering starts enabled.
    pub ad_blocking: bool,
    /// Blocklist patterns, substring-matched against request URLs.
    pub blocked_patterns: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            homepage: "https://www.bing.com".to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            ad_blocking: true,
            blocked_patterns: DEFAULT_BLOCKLIST.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
