//! Request filter
//!
//! Stateful on/off policy around the blocklist. The filter is created once
//! at startup and shared by handle; only the control thread mutates it.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::matcher::DomainMatcher;

pub struct RequestFilter {
    matcher: DomainMatcher,
    enabled: bool,
}

impl RequestFilter {
    pub fn new(matcher: DomainMatcher, enabled: bool) -> Self {
        Self { matcher, enabled }
    }

    /// Decide whether a request should be aborted.
    ///
    /// A disabled filter allows every request regardless of blocklist
    /// content.
    pub fn should_block(&self, url: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let blocked = self.matcher.matches(url);
        if blocked {
            tracing::debug!(url = %url, "Blocked request");
        }

        blocked
    }

    /// Applies to subsequent requests only; decisions already handed out
    /// stand.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn matcher(&self) -> &DomainMatcher {
        &self.matcher
    }
}

/// Cloneable handle to the single filter shared across all sessions.
///
/// All mutation happens on the control thread; a rendering engine's request
/// thread may call [`FilterHandle::should_block`] concurrently.
#[derive(Clone)]
pub struct FilterHandle(Arc<RwLock<RequestFilter>>);

impl FilterHandle {
    pub fn new(filter: RequestFilter) -> Self {
        Self(Arc::new(RwLock::new(filter)))
    }

    pub fn should_block(&self, url: &str) -> bool {
        self.0.read().should_block(url)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.write().set_enabled(enabled);
        tracing::info!(enabled, "Request filter toggled");
    }

    pub fn is_enabled(&self) -> bool {
        self.0.read().is_enabled()
    }

    pub fn pattern_count(&self) -> usize {
        self.0.read().matcher().pattern_count()
    }
}
