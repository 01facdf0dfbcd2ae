//! Test doubles for the engine seam

use std::cell::RefCell;
use std::rc::Rc;

use skiff_engine::WebEngine;

/// Engine double that records calls instead of rendering.
pub(crate) struct RecordingEngine {
    calls: Rc<RefCell<Vec<String>>>,
    can_back: bool,
    can_forward: bool,
}

impl RecordingEngine {
    pub fn new(calls: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            calls,
            can_back: false,
            can_forward: false,
        }
    }

    pub fn with_history(mut self, can_back: bool, can_forward: bool) -> Self {
        self.can_back = can_back;
        self.can_forward = can_forward;
        self
    }
}

impl WebEngine for RecordingEngine {
    fn load(&mut self, url: &str) {
        self.calls.borrow_mut().push(format!("load {}", url));
    }

    fn reload(&mut self) {
        self.calls.borrow_mut().push("reload".to_string());
    }

    fn back(&mut self) {
        self.calls.borrow_mut().push("back".to_string());
    }

    fn forward(&mut self) {
        self.calls.borrow_mut().push("forward".to_string());
    }

    fn can_go_back(&self) -> bool {
        self.can_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_forward
    }
}
