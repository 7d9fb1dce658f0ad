//! Leading-edge call throttling
//!
//! A [`Throttle`] is a pure timing gate: a call is accepted when more than
//! `delay` has passed since the last accepted call, and silently dropped
//! otherwise. The first call on a fresh gate is always accepted. Nothing is
//! queued and no trailing call is ever scheduled; the gate only matters at
//! the next real invocation.
//!
//! [`Throttled`] pairs a gate with a callback so it can be handed to an
//! event source as a drop-in handler.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::clock::{Clock, SystemClock};

/// Timing gate that accepts at most one call per `delay` window
pub struct Throttle<C = SystemClock> {
    delay: Duration,
    /// `None` until the first call is accepted
    last_accepted: Option<Instant>,
    clock: C,
}

impl Throttle<SystemClock> {
    /// Create a gate on the system clock
    pub fn new(delay: Duration) -> Self {
        Self::with_clock(delay, SystemClock)
    }
}

impl<C: Clock> Throttle<C> {
    /// Create a gate on an explicit time source
    pub fn with_clock(delay: Duration, clock: C) -> Self {
        Self {
            delay,
            last_accepted: None,
            clock,
        }
    }

    /// Check the gate, recording the call as accepted if it passes
    ///
    /// Elapsed time is measured from the last *accepted* call, so a burst of
    /// dropped calls never pushes the window forward. A clock that reads
    /// earlier than the last accepted instant counts as zero elapsed time.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();
        let open = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.delay,
        };

        if open {
            self.last_accepted = Some(now);
            trace!(delay_ms = self.delay.as_millis() as u64, "throttle accepted call");
        } else {
            trace!(delay_ms = self.delay.as_millis() as u64, "throttle dropped call");
        }
        open
    }

    /// Configured window length
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Instant of the last accepted call, if any
    pub fn last_accepted(&self) -> Option<Instant> {
        self.last_accepted
    }
}

impl<C> fmt::Debug for Throttle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("delay", &self.delay)
            .field("last_accepted", &self.last_accepted)
            .finish_non_exhaustive()
    }
}

/// A callback wrapped in its own private [`Throttle`]
pub struct Throttled<F, C = SystemClock> {
    callback: F,
    gate: Throttle<C>,
}

impl<F, C: Clock> Throttled<F, C> {
    /// Invoke the wrapped callback if the gate is open
    ///
    /// Arguments are forwarded unmodified; pass several as a tuple. Whatever
    /// the callback returns is discarded. Because this takes `&mut self`,
    /// the callback cannot synchronously re-enter the same wrapper.
    pub fn call<A, R>(&mut self, args: A)
    where
        F: FnMut(A) -> R,
    {
        self.try_call(args);
    }

    /// Like [`call`](Self::call), but report whether the callback ran
    ///
    /// Callers that must not lose an event can hold on to it and offer it
    /// again on a later call.
    pub fn try_call<A, R>(&mut self, args: A) -> bool
    where
        F: FnMut(A) -> R,
    {
        if !self.gate.try_acquire() {
            return false;
        }
        let _ = (self.callback)(args);
        true
    }

    /// The gate guarding this callback
    pub fn gate(&self) -> &Throttle<C> {
        &self.gate
    }

    /// Unwrap the original callback
    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<F, C> fmt::Debug for Throttled<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

/// Wrap `callback` so it runs at most once per `delay`, on the system clock
pub fn throttle<F>(callback: F, delay: Duration) -> Throttled<F> {
    throttle_with_clock(callback, delay, SystemClock)
}

/// Wrap `callback` so it runs at most once per `delay`, on `clock`
pub fn throttle_with_clock<F, C: Clock>(callback: F, delay: Duration, clock: C) -> Throttled<F, C> {
    Throttled {
        callback,
        gate: Throttle::with_clock(delay, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Feed calls at the given millisecond timestamps and return the ones forwarded
    fn forwarded_at(delay: Duration, stamps: &[u64]) -> Vec<u64> {
        let clock = ManualClock::new();
        let mut seen = Vec::new();
        let mut wrapped = throttle_with_clock(|t: u64| seen.push(t), delay, clock.clone());
        for &t in stamps {
            clock.set(ms(t));
            wrapped.call(t);
        }
        drop(wrapped);
        seen
    }

    #[test]
    fn test_fifty_ms_scenario() {
        assert_eq!(forwarded_at(ms(50), &[0, 30, 60, 90]), vec![0, 60]);
    }

    #[test]
    fn test_window_is_measured_from_last_accepted_call() {
        // Dropped calls at 40 and 80 must not slide the window
        assert_eq!(forwarded_at(ms(50), &[0, 40, 51, 80, 102]), vec![0, 51, 102]);
    }

    #[test]
    fn test_exact_delay_is_dropped() {
        assert_eq!(forwarded_at(ms(50), &[0, 50, 51]), vec![0, 51]);
    }

    #[test]
    fn test_matches_greedy_reference() {
        let stamps = [0, 3, 7, 12, 20, 21, 33, 34, 35, 49, 60, 61, 75, 90, 91, 120];
        let delay = 10;

        let mut expected = Vec::new();
        let mut last: Option<u64> = None;
        for &t in &stamps {
            let open = match last {
                None => true,
                Some(l) => t - l > delay,
            };
            if open {
                expected.push(t);
                last = Some(t);
            }
        }

        assert_eq!(forwarded_at(ms(delay), &stamps), expected);
    }

    #[test]
    fn test_first_call_always_forwarded() {
        for delay in [Duration::ZERO, ms(50), Duration::from_secs(3600)] {
            assert_eq!(forwarded_at(delay, &[0]), vec![0]);
        }
    }

    #[test]
    fn test_zero_delay_drops_same_instant_calls() {
        assert_eq!(forwarded_at(Duration::ZERO, &[5, 5, 6]), vec![5, 6]);
    }

    #[test]
    fn test_backwards_clock_is_dropped() {
        let clock = ManualClock::new();
        let mut gate = Throttle::with_clock(ms(10), clock.clone());

        clock.set(ms(100));
        assert!(gate.try_acquire());
        clock.set(ms(20));
        assert!(!gate.try_acquire());
        assert_eq!(gate.last_accepted(), Some(clock.now() + ms(80)));
    }

    #[test]
    fn test_instances_are_independent() {
        let clock = ManualClock::new();
        let mut a = Throttle::with_clock(ms(50), clock.clone());
        let mut b = Throttle::with_clock(ms(50), clock.clone());

        assert!(a.try_acquire());
        clock.advance(ms(10));
        assert!(b.try_acquire());
        assert!(!a.try_acquire());
    }

    #[test]
    fn test_return_value_discarded_and_tuple_args_forwarded() {
        let clock = ManualClock::new();
        let mut total = 0;
        let mut wrapped = throttle_with_clock(
            |(a, b): (i32, i32)| {
                total += a + b;
                total
            },
            ms(1),
            clock.clone(),
        );

        wrapped.call((2, 3));
        wrapped.call((100, 100));
        clock.advance(ms(2));
        wrapped.call((1, 1));
        drop(wrapped);

        assert_eq!(total, 7);
    }

    #[test]
    fn test_accepts_fn_pointers_with_borrowed_args() {
        fn bump(counter: &mut u32) {
            *counter += 1;
        }

        let clock = ManualClock::new();
        let mut counter = 0;
        let mut wrapped = throttle_with_clock(bump as fn(&mut u32), ms(5), clock.clone());

        wrapped.call(&mut counter);
        wrapped.call(&mut counter);
        clock.advance(ms(6));
        wrapped.call(&mut counter);

        assert_eq!(counter, 2);
        assert_eq!(wrapped.gate().delay(), ms(5));
    }

    #[test]
    fn test_try_call_reports_whether_callback_ran() {
        let clock = ManualClock::new();
        let mut seen = Vec::new();
        let mut wrapped = throttle_with_clock(|n: u32| seen.push(n), ms(50), clock.clone());

        assert!(wrapped.try_call(1));
        clock.advance(ms(20));
        assert!(!wrapped.try_call(2));
        clock.advance(ms(40));
        assert!(wrapped.try_call(2));
        drop(wrapped);

        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_system_clock_first_call() {
        let mut fired = false;
        let mut wrapped = throttle(|()| fired = true, Duration::from_secs(60));
        wrapped.call(());
        drop(wrapped);
        assert!(fired);
    }
}
