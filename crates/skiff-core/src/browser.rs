//! Main shell state container
//!
//! All state lives here and in the managers it owns; rendering engines are
//! stateless collaborators created through the injected factory. The
//! presentation layer issues commands and polls status through this type
//! only.

use serde::{Deserialize, Serialize};
use url::Url;

use skiff_engine::{EngineSignal, WebEngineFactory};
use skiff_filter::{DomainMatcher, FilterHandle, RequestFilter};
use skiff_session::{normalize_url, SearchTemplate, SessionInfo, SessionManager};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Browser {
    config: Config,
    filter: FilterHandle,
    sessions: SessionManager,
}

impl Browser {
    /// Wire up the shell with the given rendering-engine factory. The
    /// first session opens on the configured homepage.
    pub fn new(config: Config, engines: Box<dyn WebEngineFactory>) -> Result<Self> {
        validate(&config)?;

        let matcher = DomainMatcher::new(config.blocked_patterns.iter().map(String::as_str));
        let filter = FilterHandle::new(RequestFilter::new(matcher, config.ad_blocking));

        let sessions = SessionManager::new(
            filter.clone(),
            engines,
            config.homepage.clone(),
            SearchTemplate::new(config.search_engine.clone()),
        );

        tracing::info!(
            patterns = filter.pattern_count(),
            ad_blocking = config.ad_blocking,
            "Browser initialized"
        );

        Ok(Self {
            config,
            filter,
            sessions,
        })
    }

    // === Tab commands ===

    /// Open a new tab, activating it. `None` loads the homepage.
    pub fn open_tab(&mut self, url: Option<&str>) -> String {
        self.sessions.open_session(url)
    }

    pub fn close_tab(&mut self, id: &str) -> Result<()> {
        Ok(self.sessions.close_session(id)?)
    }

    pub fn switch_tab(&mut self, id: &str) -> Result<()> {
        Ok(self.sessions.set_active(id)?)
    }

    // === Navigation commands ===

    pub fn navigate(&mut self, url: &str) {
        self.sessions.active_navigate(url);
    }

    pub fn search(&mut self, query: &str) {
        self.sessions.active_search(query);
    }

    pub fn back(&mut self) {
        self.sessions.active_back();
    }

    pub fn forward(&mut self) {
        self.sessions.active_forward();
    }

    // === Filter commands ===

    pub fn set_filter_enabled(&mut self, enabled: bool) {
        self.sessions.set_filter_enabled(enabled);
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter.is_enabled()
    }

    /// Interception hook for rendering engines; `true` aborts the request.
    pub fn dispatch_request_through_filter(&self, url: &str) -> bool {
        self.sessions.dispatch_request_through_filter(url)
    }

    // === Events / status ===

    /// Drain engine events into session state; returns them for loading
    /// indicators.
    pub fn pump_events(&mut self) -> Vec<EngineSignal> {
        self.sessions.pump_events()
    }

    /// Snapshot for status displays.
    pub fn status(&self) -> BrowserStatus {
        let active = self.sessions.active_session();

        BrowserStatus {
            active_url: active
                .map(|s| s.current_url().to_string())
                .unwrap_or_default(),
            is_loading: active.map(|s| s.is_loading()).unwrap_or(false),
            filter_enabled: self.filter.is_enabled(),
            tab_labels: self.sessions.labels(),
        }
    }

    pub fn tabs(&self) -> Vec<SessionInfo> {
        self.sessions.session_infos()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.sessions
    }
}

fn validate(config: &Config) -> Result<()> {
    if !config.search_engine.contains("%s") {
        return Err(CoreError::Config(
            "search template is missing the %s placeholder".to_string(),
        ));
    }

    let homepage = normalize_url(&config.homepage);
    Url::parse(&homepage)
        .map_err(|e| CoreError::Config(format!("invalid homepage {}: {}", config.homepage, e)))?;

    Ok(())
}

/// Snapshot of the shell for status displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserStatus {
    pub active_url: String,
    pub is_loading: bool,
    pub filter_enabled: bool,
    pub tab_labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_engine::{EngineEvent, HeadlessEngineFactory};

    fn browser() -> Browser {
        Browser::new(Config::default(), Box::new(HeadlessEngineFactory)).unwrap()
    }

    fn browser_without_blocking() -> Browser {
        let config = Config {
            ad_blocking: false,
            ..Config::default()
        };
        Browser::new(config, Box::new(HeadlessEngineFactory)).unwrap()
    }

    #[test]
    fn test_starts_on_homepage_with_one_tab() {
        let mut browser = browser();
        browser.pump_events();

        let status = browser.status();
        assert_eq!(status.active_url, "https://www.bing.com");
        assert_eq!(status.tab_labels.len(), 1);
        assert!(status.filter_enabled);
        assert!(!status.is_loading);
    }

    #[test]
    fn test_navigate_normalizes_bare_input() {
        let mut browser = browser();
        browser.pump_events();

        browser.navigate("example.com");
        browser.pump_events();

        assert_eq!(browser.status().active_url, "http://example.com");
    }

    #[test]
    fn test_search_routes_through_provider() {
        let mut browser = browser();
        browser.pump_events();

        browser.search("cats");
        browser.pump_events();

        assert_eq!(
            browser.status().active_url,
            "https://www.bing.com/search?q=cats"
        );
    }

    #[test]
    fn test_filter_blocks_substring_matches_for_all_tabs() {
        let browser = browser();

        assert!(browser.dispatch_request_through_filter("https://ads.doubleclick.net/x"));
        assert!(
            browser.dispatch_request_through_filter("https://example.com/doubleclick.net.png")
        );
        assert!(!browser.dispatch_request_through_filter("https://example.com/page"));
    }

    #[test]
    fn test_toggle_filter_reloads_active_tab() {
        let mut browser = browser_without_blocking();
        browser.navigate("http://example.com");
        browser.pump_events();

        browser.set_filter_enabled(true);
        let signals = browser.pump_events();

        let events: Vec<&EngineEvent> = signals.iter().map(|s| &s.event).collect();
        assert_eq!(
            events,
            vec![
                &EngineEvent::LoadStarted,
                &EngineEvent::LoadFinished { success: true },
            ]
        );
        assert_eq!(browser.status().active_url, "http://example.com");
        assert!(browser.filter_enabled());
    }

    #[test]
    fn test_tab_lifecycle_commands() {
        let mut browser = browser();
        let first = browser.status();
        assert_eq!(first.tab_labels.len(), 1);

        let second = browser.open_tab(Some("http://example.com"));
        browser.pump_events();
        assert_eq!(browser.status().active_url, "http://example.com");

        let tabs = browser.tabs();
        let first_id = tabs[0].id.clone();
        browser.switch_tab(&first_id).unwrap();
        assert_eq!(browser.status().active_url, "https://www.bing.com");

        browser.close_tab(&second).unwrap();
        assert_eq!(browser.tabs().len(), 1);

        let result = browser.close_tab(&first_id);
        assert!(matches!(
            result,
            Err(CoreError::Session(
                skiff_session::SessionError::LastSession
            ))
        ));
    }

    #[test]
    fn test_back_and_forward() {
        let mut browser = browser_without_blocking();
        browser.navigate("http://a.example");
        browser.navigate("http://b.example");
        browser.pump_events();

        browser.back();
        browser.pump_events();
        assert_eq!(browser.status().active_url, "http://a.example");

        browser.forward();
        browser.pump_events();
        assert_eq!(browser.status().active_url, "http://b.example");
    }

    #[test]
    fn test_rejects_template_without_placeholder() {
        let config = Config {
            search_engine: "https://www.bing.com/search".to_string(),
            ..Config::default()
        };

        let result = Browser::new(config, Box::new(HeadlessEngineFactory));
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_status_serializes_for_the_presentation_layer() {
        let mut browser = browser();
        browser.pump_events();

        let json = serde_json::to_string(&browser.status()).unwrap();

        assert!(json.contains("\"active_url\""));
        assert!(json.contains("https://www.bing.com"));
    }
}
