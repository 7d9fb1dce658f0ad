//! Auto-follow wiring for one demo session
//!
//! Two throttled handlers share one intent tracker: the typed-char handler
//! pulls the panel to the bottom while the tracker is still following, and
//! the scroll handler feeds user scroll offsets back into the tracker. Each
//! handler has its own throttle window. Offsets reached by the follow
//! animation go straight to the tracker so the throttle window belongs to
//! the user's scrolling alone.

use std::time::Duration;

use mdtype_core::{
    throttle_with_clock, Clock, ScrollIntent, ScrollIntentTracker, SystemClock, Throttled,
};

use super::MessagePanel;

type PanelHandler = fn((&mut ScrollIntentTracker, &mut MessagePanel));
type ScrollHandler = fn((&mut ScrollIntentTracker, usize));

fn follow_content((tracker, panel): (&mut ScrollIntentTracker, &mut MessagePanel)) {
    tracker.on_content_grow(panel.attached_mut());
}

fn observe_scroll((tracker, offset): (&mut ScrollIntentTracker, usize)) {
    tracker.on_scroll(offset);
}

/// Tracker plus its two throttled handlers; rebuilt on every start/reset
pub struct FollowSession<C = SystemClock> {
    tracker: ScrollIntentTracker,
    on_typed_char: Throttled<PanelHandler, C>,
    on_scroll: Throttled<ScrollHandler, C>,
}

impl FollowSession {
    pub fn new(delay: Duration) -> Self {
        Self::with_clock(delay, SystemClock)
    }
}

impl<C: Clock + Clone> FollowSession<C> {
    pub fn with_clock(delay: Duration, clock: C) -> Self {
        Self {
            tracker: ScrollIntentTracker::new(),
            on_typed_char: throttle_with_clock(follow_content as PanelHandler, delay, clock.clone()),
            on_scroll: throttle_with_clock(observe_scroll as ScrollHandler, delay, clock),
        }
    }

    /// The renderer revealed a character
    pub fn typed_char(&mut self, panel: &mut MessagePanel) {
        self.on_typed_char.call((&mut self.tracker, panel));
    }

    /// The user scrolled to `offset`; false if the report was throttled
    pub fn user_scrolled(&mut self, offset: usize) -> bool {
        self.on_scroll.try_call((&mut self.tracker, offset))
    }

    /// The follow animation moved the panel to `offset`
    ///
    /// Animation only heads for the bottom, so this never trips the latch.
    /// It keeps the tracker's last offset current for the next user report.
    pub fn animated_to(&mut self, offset: usize) {
        self.tracker.on_scroll(offset);
    }

    pub fn intent(&self) -> ScrollIntent {
        self.tracker.intent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtype_core::ManualClock;

    const DELAY: Duration = Duration::from_millis(50);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Run the animation to rest, feeding each step to the session
    fn settle(session: &mut FollowSession<ManualClock>, panel: &mut MessagePanel) {
        while panel.tick() {
            if let Some(offset) = panel.take_animated() {
                session.animated_to(offset);
            }
        }
    }

    #[test]
    fn test_detached_panel_is_skipped() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();

        session.typed_char(&mut panel);
        assert!(!panel.is_animating());
        assert_eq!(session.intent(), ScrollIntent::Auto);
    }

    #[test]
    fn test_typed_chars_follow_at_throttled_rate() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();
        panel.set_layout(30, 10);

        session.typed_char(&mut panel);
        assert!(panel.is_animating());
        settle(&mut session, &mut panel);
        assert_eq!(panel.offset(), 20);

        panel.set_layout(40, 10);
        clock.advance(ms(10));
        session.typed_char(&mut panel);
        assert!(!panel.is_animating());

        clock.advance(ms(50));
        session.typed_char(&mut panel);
        assert!(panel.is_animating());
    }

    #[test]
    fn test_user_scroll_up_stops_following() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();
        panel.set_layout(100, 10);

        panel.scroll_down(50);
        assert!(session.user_scrolled(panel.offset()));
        clock.advance(ms(60));
        panel.scroll_up(5);
        assert!(session.user_scrolled(panel.offset()));
        assert_eq!(session.intent(), ScrollIntent::Manual);

        // Scrolling back to the bottom does not re-arm
        clock.advance(ms(60));
        panel.scroll_to_end();
        session.user_scrolled(panel.offset());
        panel.set_layout(120, 10);
        clock.advance(ms(60));
        session.typed_char(&mut panel);

        assert!(!panel.is_animating());
        assert_eq!(panel.offset(), 90);
    }

    #[test]
    fn test_scroll_up_during_animation_stops_following() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();
        panel.set_layout(60, 10);

        // Animation steps every frame never use up the user's window
        session.typed_char(&mut panel);
        for _ in 0..3 {
            clock.advance(ms(16));
            panel.tick();
            if let Some(offset) = panel.take_animated() {
                session.animated_to(offset);
            }
        }
        assert!(panel.is_animating());

        panel.scroll_up(1);
        assert!(session.user_scrolled(panel.offset()));
        assert_eq!(session.intent(), ScrollIntent::Manual);
    }

    #[test]
    fn test_user_scroll_inside_window_is_refused() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();
        panel.set_layout(100, 10);

        panel.scroll_down(20);
        assert!(session.user_scrolled(panel.offset()));
        clock.advance(ms(10));
        panel.scroll_up(5);
        assert!(!session.user_scrolled(panel.offset()));
        assert_eq!(session.intent(), ScrollIntent::Auto);

        // Offered again once the window has passed, it lands
        clock.advance(ms(50));
        assert!(session.user_scrolled(15));
        assert_eq!(session.intent(), ScrollIntent::Manual);
    }

    #[test]
    fn test_fresh_session_rearms() {
        let clock = ManualClock::new();
        let mut session = FollowSession::with_clock(DELAY, clock.clone());
        let mut panel = MessagePanel::new();
        panel.set_layout(100, 10);

        panel.scroll_down(30);
        session.user_scrolled(panel.offset());
        clock.advance(ms(60));
        panel.scroll_up(1);
        session.user_scrolled(panel.offset());
        assert_eq!(session.intent(), ScrollIntent::Manual);

        session = FollowSession::with_clock(DELAY, clock.clone());
        session.typed_char(&mut panel);
        assert_eq!(session.intent(), ScrollIntent::Auto);
        assert!(panel.is_animating());
    }
}
