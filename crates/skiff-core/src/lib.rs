//! Skiff Core
//!
//! Central coordination layer for the Skiff browsing shell. The shell owns
//! all session and filter state; rendering engines are injected behind the
//! `skiff-engine` traits and the presentation layer talks to [`Browser`]
//! only.

mod browser;
mod config;
mod error;

pub use browser::{Browser, BrowserStatus};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use skiff_engine::{
    EngineContext, EngineEvent, EngineSignal, HeadlessEngine, HeadlessEngineFactory, WebEngine,
    WebEngineFactory,
};
pub use skiff_filter::{DomainMatcher, FilterHandle, RequestFilter, DEFAULT_BLOCKLIST};
pub use skiff_session::{
    normalize_url, SearchTemplate, Session, SessionError, SessionInfo, SessionManager,
    DEFAULT_SEARCH_TEMPLATE,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
