//! Scrollable message panel
//!
//! Owns the line offset of the message box. Offsets change either from
//! the user (wheel, keys) or from the smooth scroll animation, and the two
//! are reported separately. A user scroll stays pending until the app's
//! throttled scroll handler accepts it; an animation step is only the
//! latest position the panel was moved to.

use mdtype_core::{ScrollBehavior, ScrollPanel};

/// Fraction of the remaining distance covered per animation frame
const SMOOTH_DIVISOR: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct MessagePanel {
    /// First visible line (0 = top)
    offset: usize,
    /// Total rendered lines
    content_lines: usize,
    /// Visible rows; 0 until the first layout pass
    viewport_height: usize,
    /// Target of an in-flight smooth scroll
    smooth_target: Option<usize>,
    /// Offset reached by the animation since the last report
    animated_to: Option<usize>,
    /// Offset the user scrolled to, held until a handler accepts it
    user_scrolled_to: Option<usize>,
}

impl MessagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top with no content and no animation
    pub fn reset(&mut self) {
        self.offset = 0;
        self.content_lines = 0;
        self.smooth_target = None;
        self.animated_to = None;
        self.user_scrolled_to = None;
    }

    /// The panel, if it has been laid out at least once
    pub fn attached_mut(&mut self) -> Option<&mut Self> {
        if self.viewport_height > 0 {
            Some(self)
        } else {
            None
        }
    }

    /// Record content and viewport size
    ///
    /// Clamping the offset after the content shrinks is not a scroll.
    pub fn set_layout(&mut self, content_lines: usize, viewport_height: usize) {
        self.content_lines = content_lines;
        self.viewport_height = viewport_height;
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
        }
        if let Some(target) = self.smooth_target {
            self.smooth_target = Some(target.min(max));
        }
    }

    pub fn max_offset(&self) -> usize {
        self.content_lines.saturating_sub(self.viewport_height)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.smooth_target.is_some()
    }

    // =========================================================================
    // User Scrolling
    // =========================================================================

    /// Scroll up by `amount` lines; cancels any animation
    pub fn scroll_up(&mut self, amount: usize) -> bool {
        self.user_move_to(self.offset.saturating_sub(amount))
    }

    /// Scroll down by `amount` lines; cancels any animation
    pub fn scroll_down(&mut self, amount: usize) -> bool {
        self.user_move_to(self.offset.saturating_add(amount).min(self.max_offset()))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.user_move_to(0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.user_move_to(self.max_offset())
    }

    /// One page is the viewport height minus a line of overlap
    pub fn page(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    // =========================================================================
    // Animation
    // =========================================================================

    pub fn stop_animation(&mut self) {
        self.smooth_target = None;
    }

    /// Advance the smooth scroll by one frame; returns whether it moved
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.smooth_target else {
            return false;
        };

        let next = if target > self.offset {
            let step = ((target - self.offset) / SMOOTH_DIVISOR).max(1);
            self.offset + step
        } else {
            let step = ((self.offset - target) / SMOOTH_DIVISOR).max(1);
            self.offset - step
        };
        let moved = self.move_to(next);
        if self.offset == target {
            self.smooth_target = None;
        }
        moved
    }

    // =========================================================================
    // Scroll Reports
    // =========================================================================

    /// Offset of the user scroll not yet accepted by a handler
    pub fn pending_user_scroll(&self) -> Option<usize> {
        self.user_scrolled_to
    }

    /// The pending user scroll was delivered
    pub fn clear_user_scroll(&mut self) {
        self.user_scrolled_to = None;
    }

    /// Take the latest offset the animation moved to
    pub fn take_animated(&mut self) -> Option<usize> {
        self.animated_to.take()
    }

    fn user_move_to(&mut self, offset: usize) -> bool {
        self.smooth_target = None;
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.user_scrolled_to = Some(offset);
        true
    }

    fn move_to(&mut self, offset: usize) -> bool {
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.animated_to = Some(offset);
        true
    }
}

impl ScrollPanel for MessagePanel {
    fn scroll_to_bottom(&mut self, behavior: ScrollBehavior) {
        let bottom = self.max_offset();
        match behavior {
            ScrollBehavior::Smooth => {
                if bottom == self.offset {
                    self.smooth_target = None;
                } else {
                    self.smooth_target = Some(bottom);
                }
            }
            ScrollBehavior::Instant => {
                self.smooth_target = None;
                self.move_to(bottom);
            }
        }
    }
}
