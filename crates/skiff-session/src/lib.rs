//! Skiff Session Management
//!
//! A session is one browsing tab: it owns a rendering-engine instance and
//! that engine's navigation history. The manager keeps the ordered tab
//! strip, guarantees at least one session is always open, and routes
//! navigation and search commands to the active session.

mod error;
mod manager;
mod nav;
mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::SessionError;
pub use manager::SessionManager;
pub use nav::{normalize_url, SearchTemplate, DEFAULT_SEARCH_TEMPLATE};
pub use session::{Session, SessionInfo};

pub type Result<T> = std::result::Result<T, SessionError>;
