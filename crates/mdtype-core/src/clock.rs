//! Time sources
//!
//! Throttling is a pure function of "now", so the source of "now" is
//! injected. Production code uses [`SystemClock`]; tests drive a
//! [`ManualClock`] forward explicitly instead of sleeping.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A monotonic time source
pub trait Clock {
    /// Current instant according to this clock
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same underlying time, so a test can hand one clone to
/// a throttle and keep another to advance it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Create a clock frozen at its starting instant
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock() += by;
    }

    /// Jump to an absolute offset from the starting instant
    ///
    /// Setting an offset earlier than the current one moves the clock
    /// backwards, which is useful for exercising non-monotonic sources.
    pub fn set(&self, since_start: Duration) {
        *self.elapsed.lock() = since_start;
    }

    /// Offset from the starting instant
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
