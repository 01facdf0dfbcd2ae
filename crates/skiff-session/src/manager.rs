//! Session Manager
//!
//! Owns the ordered tab strip and the active-session pointer. At least one
//! session is always open: the last one can have its content replaced but
//! never be closed. All sessions share one request filter, injected at
//! construction.

use std::sync::mpsc::{channel, Receiver};

use uuid::Uuid;

use skiff_engine::{EngineContext, EngineSignal, EventSender, WebEngineFactory};
use skiff_filter::FilterHandle;

use crate::error::SessionError;
use crate::nav::SearchTemplate;
use crate::session::{Session, SessionInfo};
use crate::Result;

pub struct SessionManager {
    /// Tab order; index-addressable, never empty.
    sessions: Vec<Session>,
    /// Always names a member of `sessions`.
    active_id: String,
    filter: FilterHandle,
    engines: Box<dyn WebEngineFactory>,
    events: Receiver<EngineSignal>,
    sender: EventSender,
    search_template: SearchTemplate,
    homepage: String,
}

impl SessionManager {
    /// Create the manager with its initial session already navigating to
    /// the homepage.
    pub fn new(
        filter: FilterHandle,
        engines: Box<dyn WebEngineFactory>,
        homepage: impl Into<String>,
        search_template: SearchTemplate,
    ) -> Self {
        let (sender, events) = channel();

        let mut manager = Self {
            sessions: Vec::new(),
            active_id: String::new(),
            filter,
            engines,
            events,
            sender,
            search_template,
            homepage: homepage.into(),
        };

        manager.open_session(None);
        manager
    }

    /// Open a new session at the end of the tab order, make it active, and
    /// start navigation to `url` (the homepage when `None`). Returns the new
    /// session's id.
    pub fn open_session(&mut self, url: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        let ctx = EngineContext::new(id.clone(), self.sender.clone(), self.filter.clone());
        let engine = self.engines.create(ctx);

        let mut session = Session::new(id.clone(), engine, self.search_template.clone());
        let target = url.unwrap_or(self.homepage.as_str()).to_string();
        session.navigate(&target);

        self.sessions.push(session);
        self.active_id = id.clone();

        tracing::info!(
            session_id = %id,
            url = %target,
            count = self.sessions.len(),
            "Opened session"
        );

        id
    }

    /// Close a session. The last remaining session cannot be closed; when
    /// the active one is closed, the session now occupying the closed index
    /// (clamped to the end) becomes active.
    pub fn close_session(&mut self, id: &str) -> Result<()> {
        let index = self.index_of(id)?;
        if self.sessions.len() == 1 {
            return Err(SessionError::LastSession);
        }

        let was_active = self.active_id == id;
        self.sessions.remove(index);

        if was_active {
            let fallback = index.min(self.sessions.len() - 1);
            self.sessions[fallback].touch();
            self.active_id = self.sessions[fallback].id().to_string();
        }

        tracing::info!(
            session_id = %id,
            remaining = self.sessions.len(),
            "Closed session"
        );

        Ok(())
    }

    /// Switch the active pointer.
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        let index = self.index_of(id)?;
        self.sessions[index].touch();
        self.active_id = self.sessions[index].id().to_string();
        Ok(())
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == self.active_id)
    }

    fn active_session_mut(&mut self) -> Option<&mut Session> {
        let active_id = self.active_id.clone();
        self.sessions.iter_mut().find(|s| s.id() == active_id)
    }

    /// Forward a navigation command to the active session.
    pub fn active_navigate(&mut self, url: &str) {
        if let Some(session) = self.active_session_mut() {
            session.navigate(url);
        }
    }

    /// Forward a search command to the active session.
    pub fn active_search(&mut self, query: &str) {
        if let Some(session) = self.active_session_mut() {
            session.search(query);
        }
    }

    pub fn active_back(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.go_back();
        }
    }

    pub fn active_forward(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.go_forward();
        }
    }

    pub fn reload_active(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.reload();
        }
    }

    /// Called by engines before each network fetch; `true` aborts the
    /// request. The same shared filter answers for every session.
    pub fn dispatch_request_through_filter(&self, url: &str) -> bool {
        self.filter.should_block(url)
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter.is_enabled()
    }

    /// Toggle the shared filter, then reload the displayed session so the
    /// new policy applies to already-loaded content. Background sessions
    /// pick it up on their next request.
    pub fn set_filter_enabled(&mut self, enabled: bool) {
        self.filter.set_enabled(enabled);
        self.reload_active();
    }

    /// Drain pending engine events and fold them into session state.
    ///
    /// Returns the drained signals so the caller can drive loading
    /// indicators. Signals for sessions closed in the meantime are dropped.
    pub fn pump_events(&mut self) -> Vec<EngineSignal> {
        let mut drained = Vec::new();

        while let Ok(signal) = self.events.try_recv() {
            match self
                .sessions
                .iter_mut()
                .find(|s| s.id() == signal.session_id)
            {
                Some(session) => {
                    session.apply_event(&signal.event);
                    drained.push(signal);
                }
                None => {
                    tracing::debug!(
                        session_id = %signal.session_id,
                        "Dropping event for closed session"
                    );
                }
            }
        }

        drained
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn session(&self, id: &str) -> Result<&Session> {
        let index = self.index_of(id)?;
        Ok(&self.sessions[index])
    }

    /// Snapshots in tab order.
    pub fn session_infos(&self) -> Vec<SessionInfo> {
        self.sessions.iter().map(Session::info).collect()
    }

    /// Display labels in tab order.
    pub fn labels(&self) -> Vec<String> {
        self.sessions
            .iter()
            .map(|s| s.display_label().to_string())
            .collect()
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.sessions
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }
}
