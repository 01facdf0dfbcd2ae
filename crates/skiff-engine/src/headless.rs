//! Headless engine
//!
//! A deterministic in-memory engine with a real history cursor. It emits the
//! full event sequence synchronously from each call, which makes it the
//! reference implementation for tests and for embedders that need a
//! renderer-less shell.

use crate::event::EngineEvent;
use crate::traits::{EngineContext, WebEngine, WebEngineFactory};

pub struct HeadlessEngine {
    ctx: EngineContext,
    history: Vec<String>,
    /// Index into `history`; meaningful only while `history` is non-empty.
    cursor: usize,
}

impl HeadlessEngine {
    pub fn new(ctx: EngineContext) -> Self {
        Self {
            ctx,
            history: Vec::new(),
            cursor: 0,
        }
    }

    fn current(&self) -> Option<&str> {
        self.history.get(self.cursor).map(String::as_str)
    }

    fn finish_blocked(&self, url: &str) {
        tracing::debug!(session_id = %self.ctx.session_id, url = %url, "Load aborted by request filter");
        self.ctx.emit(EngineEvent::LoadFinished { success: false });
    }
}

impl WebEngine for HeadlessEngine {
    fn load(&mut self, url: &str) {
        self.ctx.emit(EngineEvent::LoadStarted);

        if self.ctx.filter.should_block(url) {
            self.finish_blocked(url);
            return;
        }

        // A fresh load discards any forward history.
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(url.to_string());
        self.cursor = self.history.len() - 1;

        self.ctx.emit(EngineEvent::UrlChanged {
            url: url.to_string(),
        });
        self.ctx.emit(EngineEvent::LoadFinished { success: true });
    }

    fn reload(&mut self) {
        let Some(url) = self.current().map(str::to_string) else {
            return;
        };

        self.ctx.emit(EngineEvent::LoadStarted);

        if self.ctx.filter.should_block(&url) {
            self.finish_blocked(&url);
            return;
        }

        self.ctx.emit(EngineEvent::LoadFinished { success: true });
    }

    fn back(&mut self) {
        if !self.can_go_back() {
            return;
        }

        self.cursor -= 1;
        let url = self.history[self.cursor].clone();

        self.ctx.emit(EngineEvent::LoadStarted);
        self.ctx.emit(EngineEvent::UrlChanged { url });
        self.ctx.emit(EngineEvent::LoadFinished { success: true });
    }

    fn forward(&mut self) {
        if !self.can_go_forward() {
            return;
        }

        self.cursor += 1;
        let url = self.history[self.cursor].clone();

        self.ctx.emit(EngineEvent::LoadStarted);
        self.ctx.emit(EngineEvent::UrlChanged { url });
        self.ctx.emit(EngineEvent::LoadFinished { success: true });
    }

    fn can_go_back(&self) -> bool {
        !self.history.is_empty() && self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        !self.history.is_empty() && self.cursor + 1 < self.history.len()
    }
}

#[derive(Debug, Default)]
pub struct HeadlessEngineFactory;

impl WebEngineFactory for HeadlessEngineFactory {
    fn create(&self, ctx: EngineContext) -> Box<dyn WebEngine> {
        Box::new(HeadlessEngine::new(ctx))
    }
}
