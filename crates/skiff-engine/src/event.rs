//! Engine event types

use serde::{Deserialize, Serialize};

/// Navigation lifecycle events emitted by a rendering engine.
///
/// Events for one session arrive in emission order; no ordering holds
/// across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The engine started loading a page.
    LoadStarted,
    /// The engine finished loading. `success` is false for DNS errors,
    /// malformed URLs and blocked top-level requests.
    LoadFinished { success: bool },
    /// The displayed URL changed, possibly without a load cycle
    /// (same-page navigation).
    UrlChanged { url: String },
}

/// An event tagged with the session that owns the emitting engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSignal {
    pub session_id: String,
    pub event: EngineEvent,
}

/// Sending half of the event channel, handed to each engine at creation.
pub type EventSender = std::sync::mpsc::Sender<EngineSignal>;
