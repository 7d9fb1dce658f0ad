//! App State Components
//!
//! Panel scrolling and the per-session auto-follow wiring.

mod follow;
mod layout;
mod panel;

pub use follow::FollowSession;
pub use layout::LayoutState;
pub use panel::MessagePanel;
