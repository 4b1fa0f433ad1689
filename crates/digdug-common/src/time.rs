//! Millisecond timestamps and polled stopwatches.
//!
//! Timers in the engine are never callbacks. A [`Stopwatch`] remembers when
//! it was started and how much time it accumulated; callers poll
//! [`Stopwatch::elapsed`] with the current [`Millis`] timestamp and compare.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Monotonic timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// Timestamp zero.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond count.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, clamped at zero.
    #[must_use]
    pub const fn since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Wall-clock source producing [`Millis`] relative to its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose zero is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Returns the milliseconds elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u64)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Elapsed-time counter with start/stop/reset/restart semantics.
///
/// A stopped stopwatch keeps its accumulated time until reset, and
/// `start` on a running stopwatch does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stopwatch {
    /// Time accumulated by previous running intervals
    accumulated: u64,
    /// Start of the current running interval
    started_at: Option<Millis>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulated: 0,
            started_at: None,
        }
    }

    /// Starts measuring if not already running.
    pub fn start(&mut self, now: Millis) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stops measuring, keeping the accumulated time.
    pub fn stop(&mut self, now: Millis) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.since(started);
        }
    }

    /// Stops and clears the stopwatch.
    pub fn reset(&mut self) {
        self.accumulated = 0;
        self.started_at = None;
    }

    /// Clears the stopwatch and starts it again from `now`.
    pub fn restart(&mut self, now: Millis) {
        self.accumulated = 0;
        self.started_at = Some(now);
    }

    /// Returns whether the stopwatch is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns the total measured milliseconds as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Millis) -> u64 {
        match self.started_at {
            Some(started) => self.accumulated + now.since(started),
            None => self.accumulated,
        }
    }
}
