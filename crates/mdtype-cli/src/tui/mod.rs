//! Terminal User Interface for mdtype

pub mod app;
pub mod handlers;
pub mod renderer;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
