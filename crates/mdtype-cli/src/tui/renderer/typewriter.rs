//! Character-by-character reveal

use std::time::{Duration, Instant};

use tracing::debug;

/// Where the reveal currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    /// No content
    Idle,
    /// Revealing; `anchor` is the instant the next interval is measured from
    Typing { anchor: Instant },
    /// Stopped by the user, resumable
    Paused,
    /// Everything is visible
    Done,
}

/// Reveals a source text at a fixed interval per character
pub struct Typewriter {
    source: String,
    /// Byte length of the visible prefix
    revealed_bytes: usize,
    revealed_chars: usize,
    interval: Duration,
    state: TypingState,
}

impl Typewriter {
    pub fn new(interval: Duration) -> Self {
        Self {
            source: String::new(),
            revealed_bytes: 0,
            revealed_chars: 0,
            interval,
            state: TypingState::Idle,
        }
    }

    /// Replace the content and restart the reveal from the beginning
    ///
    /// Empty content clears the typewriter.
    pub fn set_content(&mut self, content: &str, now: Instant) {
        self.source = content.to_string();
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.state = if content.is_empty() {
            TypingState::Idle
        } else {
            TypingState::Typing { anchor: now }
        };
        debug!(chars = content.chars().count(), "Typewriter content set");
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.state = TypingState::Idle;
    }

    /// Advance the reveal to `now`; returns how many characters appeared
    pub fn tick(&mut self, now: Instant) -> usize {
        let TypingState::Typing { anchor } = self.state else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let due = if self.interval.is_zero() {
            usize::MAX
        } else {
            (elapsed.as_nanos() / self.interval.as_nanos()).min(usize::MAX as u128) as usize
        };
        if due == 0 {
            return 0;
        }

        let rest = &self.source[self.revealed_bytes..];
        let (count, bytes) = rest
            .chars()
            .take(due)
            .fold((0usize, 0usize), |(n, b), c| (n + 1, b + c.len_utf8()));
        self.revealed_bytes += bytes;
        self.revealed_chars += count;

        if self.revealed_bytes >= self.source.len() {
            self.state = TypingState::Done;
            debug!(chars = self.revealed_chars, "Typewriter finished");
        } else {
            // Keep the fractional remainder so the pace doesn't drift
            let advance = self.interval.saturating_mul(count as u32);
            self.state = TypingState::Typing {
                anchor: anchor + advance,
            };
        }
        count
    }

    /// Pause the reveal; no-op unless typing
    pub fn stop(&mut self) -> bool {
        if matches!(self.state, TypingState::Typing { .. }) {
            self.state = TypingState::Paused;
            true
        } else {
            false
        }
    }

    /// Continue a paused reveal from `now`; time spent paused is not caught up
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state == TypingState::Paused {
            self.state = TypingState::Typing { anchor: now };
            true
        } else {
            false
        }
    }

    /// Text revealed so far
    pub fn visible(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }

    pub fn has_content(&self) -> bool {
        !self.source.is_empty()
    }

    pub fn state(&self) -> TypingState {
        self.state
    }
}
