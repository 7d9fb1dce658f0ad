//! mdtype Core - Shared library for the mdtype demo
//!
//! This crate provides the pieces the terminal demo wires together:
//! - Leading-edge call throttling with an injectable clock
//! - Auto-scroll intent tracking for a streaming message panel
//! - Configuration, document loading, and well-known paths

pub mod clock;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod paths;
pub mod scroll_intent;
pub mod throttle;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DemoConfig, ThemeMode};
pub use document::DemoDocument;
pub use error::ConfigError;
pub use scroll_intent::{ScrollBehavior, ScrollIntent, ScrollIntentTracker, ScrollPanel};
pub use throttle::{throttle, throttle_with_clock, Throttle, Throttled};
