//! Engine trait boundary

use skiff_filter::FilterHandle;

use crate::event::{EngineEvent, EngineSignal, EventSender};

/// Everything an engine instance needs to report back to the shell.
pub struct EngineContext {
    /// Session that owns this engine instance.
    pub session_id: String,
    /// Channel for navigation lifecycle events.
    pub events: EventSender,
    /// Consulted before every network request; `true` aborts the request.
    pub filter: FilterHandle,
}

impl EngineContext {
    pub fn new(session_id: String, events: EventSender, filter: FilterHandle) -> Self {
        Self {
            session_id,
            events,
            filter,
        }
    }

    /// Emit an event for the owning session. Dropped silently if the shell
    /// side of the channel is gone.
    pub fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(EngineSignal {
            session_id: self.session_id.clone(),
            event,
        });
    }
}

/// One rendering engine instance, owned 1:1 by a session.
///
/// All methods return immediately; completion is observed through events.
/// Starting a new load before the previous one finished supersedes it, and
/// the engine reports at most one `LoadFinished` for the superseded chain.
pub trait WebEngine {
    fn load(&mut self, url: &str);
    fn reload(&mut self);
    fn back(&mut self);
    fn forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
}

/// Creates engine instances for new sessions.
pub trait WebEngineFactory {
    fn create(&self, ctx: EngineContext) -> Box<dyn WebEngine>;
}
