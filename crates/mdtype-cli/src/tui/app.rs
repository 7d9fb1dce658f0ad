//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use mdtype_core::constants::timing;
use mdtype_core::{DemoConfig, DemoDocument, ThemeMode};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::tui::renderer::{RenderCache, Typewriter};
use crate::tui::state::{FollowSession, LayoutState, MessagePanel};
use crate::tui::themes::Theme;

/// Application state
pub struct App {
    pub config: DemoConfig,
    pub document: DemoDocument,
    pub theme_mode: ThemeMode,
    pub math_enabled: bool,
    pub typewriter: Typewriter,
    pub panel: MessagePanel,
    /// Auto-follow state for the current demo run
    pub follow: FollowSession,
    pub render_cache: RenderCache,
    pub layout: LayoutState,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(config: DemoConfig, document: DemoDocument) -> Self {
        Self {
            theme_mode: config.theme,
            math_enabled: config.math,
            typewriter: Typewriter::new(config.typing_interval()),
            panel: MessagePanel::new(),
            follow: FollowSession::new(config.throttle_delay()),
            render_cache: RenderCache::new(),
            layout: LayoutState::new(),
            should_quit: false,
            needs_redraw: true,
            config,
            document,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.theme_mode)
    }

    // =========================================================================
    // Page Actions
    // =========================================================================

    /// "Click to Show": start revealing the document
    pub fn show_answer(&mut self, now: Instant) {
        self.start_session();
        self.typewriter.set_content(&self.document.content, now);
        tracing::info!(
            chars = self.document.content.chars().count(),
            "Started answer reveal"
        );
    }

    /// "Reset": clear the answer
    pub fn reset(&mut self) {
        self.start_session();
        self.typewriter.clear();
        tracing::info!("Reset demo");
    }

    /// Show when empty, reset when showing
    pub fn toggle_answer(&mut self, now: Instant) {
        if self.typewriter.has_content() {
            self.reset();
        } else {
            self.show_answer(now);
        }
    }

    /// Fresh tracker, throttles, and panel position
    fn start_session(&mut self) {
        self.follow = FollowSession::new(self.config.throttle_delay());
        self.panel.reset();
        self.render_cache.invalidate();
        self.needs_redraw = true;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.needs_redraw = true;
        tracing::info!(theme = %self.theme_mode, "Switched theme");
    }

    pub fn toggle_math(&mut self) {
        self.math_enabled = !self.math_enabled;
        self.needs_redraw = true;
        tracing::info!(enabled = self.math_enabled, "Toggled math rendering");
    }

    pub fn pause(&mut self) {
        if self.typewriter.stop() {
            self.needs_redraw = true;
            tracing::info!(revealed = self.typewriter.revealed_chars(), "Paused reveal");
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.typewriter.resume(now) {
            self.needs_redraw = true;
            tracing::info!("Resumed reveal");
        }
    }

    // =========================================================================
    // Terminal Lifecycle
    // =========================================================================

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            self.tick(Instant::now());

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        },
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => {
                            tracing::info!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                    }
                }
                _ = tokio::time::sleep(timing::FRAME) => {
                    // Timeout - continue loop for the reveal and scroll animation
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
