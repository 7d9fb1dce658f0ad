//! Page rendering
//!
//! Toolbar with the demo controls, the message box, and a status line.

use mdtype_core::constants::ui::PROMPT;
use mdtype_core::{ScrollIntent, ThemeMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::renderer::TypingState;
use crate::tui::themes::Theme;

impl App {
    pub fn start_label(&self) -> &'static str {
        if self.typewriter.has_content() {
            "Reset"
        } else {
            "Click to Show"
        }
    }

    pub fn theme_label(&self) -> &'static str {
        match self.theme_mode {
            ThemeMode::Light => "Switch to Dark",
            ThemeMode::Dark => "Switch to Light",
        }
    }

    pub fn math_label(&self) -> &'static str {
        if self.math_enabled {
            "Disable Math Rendering"
        } else {
            "Enable Math Rendering"
        }
    }

    /// Draw the whole page
    pub fn ui(&mut self, f: &mut Frame) {
        let theme = self.theme();
        f.render_widget(
            Block::default().style(Style::default().bg(theme.bg_color)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_toolbar(f, chunks[0], theme);
        self.render_messages(f, chunks[2], theme);
        self.render_status(f, chunks[3], theme);
    }

    fn render_toolbar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let key = Style::default()
            .fg(theme.button_color)
            .add_modifier(Modifier::BOLD);
        let label = Style::default().fg(theme.text_color);

        let first = Line::from(vec![
            Span::styled("[Enter] ", key),
            Span::styled(self.start_label(), label),
            Span::raw("      "),
            Span::styled(PROMPT, Style::default().fg(theme.accent_color)),
        ]);
        let second = Line::from(vec![
            Span::styled("[t] ", key),
            Span::styled(self.theme_label(), label),
            Span::raw("  "),
            Span::styled("[m] ", key),
            Span::styled(self.math_label(), label),
            Span::raw("  "),
            Span::styled("[p] ", key),
            Span::styled("Pause", label),
            Span::raw("  "),
            Span::styled("[r] ", key),
            Span::styled("Resume", label),
        ]);

        f.render_widget(Paragraph::new(vec![first, second]), area);
    }

    fn render_messages(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        self.layout.message_area = Some(area);
        self.layout.message_inner = Some(inner);
        self.refresh_layout();

        let start = self.panel.offset();
        let lines = self.render_cache.lines();
        let end = (start + inner.height as usize).min(lines.len());
        let visible: Vec<Line<'static>> = lines
            .get(start..end)
            .map(|slice| slice.to_vec())
            .unwrap_or_default();

        f.render_widget(
            Paragraph::new(visible).style(Style::default().fg(theme.text_color)),
            inner,
        );
    }

    fn render_status(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dim = Style::default().fg(theme.dim_color);

        let reveal = match self.typewriter.state() {
            TypingState::Idle => "idle",
            TypingState::Typing { .. } => "typing",
            TypingState::Paused => "paused",
            TypingState::Done => "done",
        };
        let follow = match self.follow.intent() {
            ScrollIntent::Auto => "auto-scroll",
            ScrollIntent::Manual => "manual scroll",
        };

        let status = Line::from(vec![
            Span::styled(format!(" {} ", reveal), dim),
            Span::styled("· ", dim),
            Span::styled(follow, dim),
            Span::styled(" · ", dim),
            Span::styled(format!("{} chars", self.typewriter.revealed_chars()), dim),
            Span::styled(format!(" · {} theme", theme.display_name), dim),
            Span::styled(" · q quit", dim),
        ]);
        f.render_widget(Paragraph::new(status), area);
    }
}
