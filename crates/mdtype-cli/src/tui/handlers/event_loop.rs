//! Frame tick: reveal progress, scroll animation, scroll reports

use std::time::Instant;

use mdtype_core::ScrollIntent;

use crate::tui::app::App;

impl App {
    /// Advance the reveal and the scroll animation to `now`
    pub fn tick(&mut self, now: Instant) {
        // A user scroll still waiting on the throttle goes before any new follow
        self.report_scroll();

        let revealed = self.typewriter.tick(now);
        if revealed > 0 {
            // Layout must reflect the new text before anyone scrolls to its bottom
            self.refresh_layout();
            for _ in 0..revealed {
                self.follow.typed_char(&mut self.panel);
            }
            self.needs_redraw = true;
        }

        if self.panel.tick() {
            self.needs_redraw = true;
        }
        self.report_scroll();
    }

    /// Deliver scroll reports to the follow session
    ///
    /// A user scroll is offered to the throttled handler on every call until
    /// it is accepted. Animation steps are only passed on while no user
    /// scroll is waiting.
    pub(crate) fn report_scroll(&mut self) {
        let animated = self.panel.take_animated();

        if let Some(offset) = self.panel.pending_user_scroll() {
            if self.follow.user_scrolled(offset) {
                self.panel.clear_user_scroll();
                if self.follow.intent() == ScrollIntent::Manual {
                    self.panel.stop_animation();
                }
                self.needs_redraw = true;
            }
            return;
        }

        if let Some(offset) = animated {
            self.follow.animated_to(offset);
        }
    }

    /// Re-render for the last known message area and resize the panel
    pub(crate) fn refresh_layout(&mut self) {
        let Some(inner) = self.layout.message_inner else {
            return;
        };
        let line_count = self
            .render_cache
            .get_or_render(
                self.typewriter.visible(),
                inner.width as usize,
                self.theme_mode,
                self.math_enabled,
            )
            .len();
        self.panel.set_layout(line_count, inner.height as usize);
    }
}
