//! Session data structure
//!
//! One session is one browsing tab: a rendering-engine instance plus the
//! navigation state the shell tracks for it. Destroying the session
//! destroys the engine instance with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skiff_engine::{EngineEvent, WebEngine};

use crate::nav::{normalize_url, SearchTemplate};

pub struct Session {
    /// Unique identifier, stable for the session's lifetime.
    id: String,
    /// Last URL reported by the engine.
    current_url: String,
    /// True between `LoadStarted` and `LoadFinished`.
    is_loading: bool,
    search_template: SearchTemplate,
    engine: Box<dyn WebEngine>,
    created_at: DateTime<Utc>,
    last_accessed_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String, engine: Box<dyn WebEngine>, search_template: SearchTemplate) -> Self {
        let now = Utc::now();

        Self {
            id,
            current_url: String::new(),
            is_loading: false,
            search_template,
            engine,
            created_at: now,
            last_accessed_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn can_go_back(&self) -> bool {
        self.engine.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.engine.can_go_forward()
    }

    /// Dispatch a load for `url`, prepending a scheme when absent.
    ///
    /// Returns immediately; the outcome arrives as engine events. A load
    /// dispatched while another is in flight supersedes it.
    pub fn navigate(&mut self, url: &str) {
        let url = normalize_url(url);
        tracing::debug!(session_id = %self.id, url = %url, "Navigating");
        self.engine.load(&url);
    }

    /// Navigate to the search provider with `query` embedded.
    pub fn search(&mut self, query: &str) {
        let url = self.search_template.build(query);
        self.navigate(&url);
    }

    /// No-op when the engine has no earlier history entry.
    pub fn go_back(&mut self) {
        if self.engine.can_go_back() {
            self.engine.back();
        }
    }

    /// No-op when the engine has no later history entry.
    pub fn go_forward(&mut self) {
        if self.engine.can_go_forward() {
            self.engine.forward();
        }
    }

    /// Re-request the currently displayed page.
    pub fn reload(&mut self) {
        self.engine.reload();
    }

    /// Refresh the access timestamp (session became active).
    pub fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }

    /// Fold an engine event into the session's state.
    pub fn apply_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::LoadStarted => {
                self.is_loading = true;
            }
            EngineEvent::LoadFinished { success } => {
                self.is_loading = false;
                if !*success {
                    tracing::warn!(session_id = %self.id, url = %self.current_url, "Load failed");
                }
            }
            EngineEvent::UrlChanged { url } => {
                self.current_url = url.clone();
            }
        }
    }

    /// Label shown in the tab strip.
    pub fn display_label(&self) -> &str {
        if self.current_url.is_empty() {
            "New Tab"
        } else {
            &self.current_url
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id.clone(),
            url: self.current_url.clone(),
            label: self.display_label().to_string(),
            is_loading: self.is_loading,
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            created_at: self.created_at,
            last_accessed_at: self.last_accessed_at,
        }
    }
}

/// Immutable snapshot of a session for display layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    pub url: String,
    pub label: String,
    pub is_loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}
