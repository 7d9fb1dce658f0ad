//! Mouse event handlers

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::tui::app::App;

/// Lines per wheel notch
const WHEEL_LINES: usize = 3;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.layout.is_over_messages(mouse.column, mouse.row) {
            return;
        }
        let moved = match mouse.kind {
            MouseEventKind::ScrollUp => self.panel.scroll_up(WHEEL_LINES),
            MouseEventKind::ScrollDown => self.panel.scroll_down(WHEEL_LINES),
            _ => false,
        };
        self.after_user_scroll(moved);
    }
}
