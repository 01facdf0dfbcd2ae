//! Skiff Rendering Engine Abstraction
//!
//! The shell never renders pages itself. Each session owns one engine
//! instance behind [`WebEngine`]; engines report progress as
//! [`EngineEvent`]s over a single-consumer channel and consult the shared
//! request filter before every network fetch.

mod event;
mod headless;
mod traits;

pub use event::{EngineEvent, EngineSignal, EventSender};
pub use headless::{HeadlessEngine, HeadlessEngineFactory};
pub use traits::{EngineContext, WebEngine, WebEngineFactory};
