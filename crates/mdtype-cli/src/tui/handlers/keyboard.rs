//! Keyboard event handlers

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        let now = Instant::now();
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('s') => self.toggle_answer(now),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('m') => self.toggle_math(),
            KeyCode::Char('p') => self.pause(),
            KeyCode::Char('r') => self.resume(now),
            KeyCode::Up | KeyCode::Char('k') => {
                let moved = self.panel.scroll_up(1);
                self.after_user_scroll(moved);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let moved = self.panel.scroll_down(1);
                self.after_user_scroll(moved);
            }
            KeyCode::PageUp => {
                let moved = self.panel.scroll_up(self.panel.page());
                self.after_user_scroll(moved);
            }
            KeyCode::PageDown => {
                let moved = self.panel.scroll_down(self.panel.page());
                self.after_user_scroll(moved);
            }
            KeyCode::Home => {
                let moved = self.panel.scroll_to_top();
                self.after_user_scroll(moved);
            }
            KeyCode::End => {
                let moved = self.panel.scroll_to_end();
                self.after_user_scroll(moved);
            }
            _ => {}
        }
    }

    pub(crate) fn after_user_scroll(&mut self, moved: bool) {
        if moved {
            self.report_scroll();
            self.needs_redraw = true;
        }
    }
}
