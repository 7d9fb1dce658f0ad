//! Cached layout areas for hit testing

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    /// Message box including its border
    pub message_area: Option<Rect>,
    /// Inner text area of the message box
    pub message_inner: Option<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a mouse position falls on the message box
    pub fn is_over_messages(&self, column: u16, row: u16) -> bool {
        self.message_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}
