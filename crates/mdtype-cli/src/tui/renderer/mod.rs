//! Typewriter renderer
//!
//! Stand-in for the streaming markdown component: reveals the answer one
//! character at a time, reports each revealed character, and styles
//! bracket-delimited math spans when math rendering is on.

mod cache;
mod lines;
mod math;
mod typewriter;

pub use cache::RenderCache;
pub use typewriter::{Typewriter, TypingState};
