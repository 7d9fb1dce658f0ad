//! Event handlers
//!
//! `impl App` blocks split out of app.rs by concern.

mod event_loop;
mod keyboard;
mod mouse;
mod rendering;
