//! Skiff Request Filtering
//!
//! One filter instance is shared by every browsing session: engines consult
//! it before each network fetch, and a single toggle switches blocking on or
//! off for the whole shell.

mod filter;
mod matcher;

pub use filter::{FilterHandle, RequestFilter};
pub use matcher::{DomainMatcher, DEFAULT_BLOCKLIST};
