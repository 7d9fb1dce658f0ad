//! Auto-scroll intent tracking
//!
//! Decides whether a panel receiving a stream of revealed content should
//! follow it to the bottom. The heuristic is a one-way latch: the first
//! time the user scrolls toward the top, auto-follow stops for the rest of
//! the panel's lifetime. Scrolling back down does not re-arm it; only a
//! fresh tracker does.

use tracing::debug;

/// Whether new content should pull the panel to its bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollIntent {
    /// Follow new content (initial state)
    #[default]
    Auto,
    /// The user took over; never follow again (terminal state)
    Manual,
}

/// How a scroll-to-bottom request should be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate toward the target over several frames
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// A scrollable surface the tracker can pull to its bottom
pub trait ScrollPanel {
    /// Scroll to the end of the content
    fn scroll_to_bottom(&mut self, behavior: ScrollBehavior);
}

/// Tracks scroll deltas and gates auto-scroll on content growth
///
/// `T` is the scroll offset type. Any ordered numeric offset works; the
/// terminal demo uses line counts.
#[derive(Debug, Clone)]
pub struct ScrollIntentTracker<T = usize> {
    intent: ScrollIntent,
    prev_scroll_top: T,
}

impl<T: PartialOrd + Copy + Default> ScrollIntentTracker<T> {
    /// Fresh tracker: following, previous offset at zero
    pub fn new() -> Self {
        Self {
            intent: ScrollIntent::Auto,
            prev_scroll_top: T::default(),
        }
    }

    /// Observe a scroll event with the panel's current top offset
    pub fn on_scroll(&mut self, current_scroll_top: T) {
        if current_scroll_top < self.prev_scroll_top && self.intent == ScrollIntent::Auto {
            self.intent = ScrollIntent::Manual;
            debug!("user scrolled up, auto-scroll disabled");
        }
        self.prev_scroll_top = current_scroll_top;
    }

    /// New content was revealed; scroll the panel if still following
    ///
    /// A panel that is not attached yet is skipped. Returns whether a
    /// scroll was requested.
    pub fn on_content_grow<P: ScrollPanel + ?Sized>(&self, panel: Option<&mut P>) -> bool {
        if self.intent == ScrollIntent::Manual {
            return false;
        }
        match panel {
            Some(panel) => {
                panel.scroll_to_bottom(ScrollBehavior::Smooth);
                true
            }
            None => false,
        }
    }

    pub fn intent(&self) -> ScrollIntent {
        self.intent
    }

    pub fn needs_auto_scroll(&self) -> bool {
        self.intent == ScrollIntent::Auto
    }

    pub fn prev_scroll_top(&self) -> T {
        self.prev_scroll_top
    }
}

impl<T: PartialOrd + Copy + Default> Default for ScrollIntentTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}
