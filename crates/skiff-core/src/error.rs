//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] skiff_session::SessionError),

    #[error("Configuration error: {0}")]
    Config(String),
}
