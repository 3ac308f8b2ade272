//! Time sources and deadlines for search time management.
//!
//! The engine never reads the system clock directly. It samples a [`Clock`]
//! once per iteration through a [`Deadline`], so tests can drive timeouts
//! with a [`ManualClock`] instead of real elapsed time.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed epoch.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time measured from when the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        SystemClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Every call to [`Clock::now`] returns the current reading and then
/// advances it by `tick`, so a run's iteration count maps directly onto
/// simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    /// A frozen clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that advances by `tick` each time it is sampled.
    #[must_use]
    pub fn ticking(tick: Duration) -> Self {
        ManualClock {
            now: Cell::new(Duration::ZERO),
            tick,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Current reading without advancing.
    #[must_use]
    pub fn peek(&self) -> Duration {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.now.get();
        self.now.set(reading.saturating_add(self.tick));
        reading
    }
}

/// A time budget anchored at the moment it was started.
pub struct Deadline<'a, C: Clock + ?Sized> {
    clock: &'a C,
    started: Duration,
    limit: Duration,
}

impl<'a, C: Clock + ?Sized> Deadline<'a, C> {
    /// Sample `clock` once and allow `limit` from that point on.
    pub fn start(clock: &'a C, limit: Duration) -> Self {
        Deadline {
            clock,
            started: clock.now(),
            limit,
        }
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Whether the budget is spent. Samples the clock.
    #[inline]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.limit
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_ticks_per_sample() {
        let clock = ManualClock::ticking(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::from_millis(10));
        assert_eq!(clock.peek(), Duration::from_millis(20));
    }

    #[test]
    fn test_frozen_clock_never_expires() {
        let clock = ManualClock::new();
        let deadline = Deadline::start(&clock, Duration::from_nanos(1));
        for _ in 0..100 {
            assert!(!deadline.is_expired());
        }
    }

    #[test]
    fn test_deadline_expires_after_limit() {
        let clock = ManualClock::new();
        let deadline = Deadline::start(&clock, Duration::from_secs(5));
        clock.advance(Duration::from_secs(4));
        assert!(!deadline.is_expired());
        clock.advance(Duration::from_secs(1));
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_deadline_relative_to_start() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(100));
        let deadline = Deadline::start(&clock, Duration::from_secs(1));
        assert_eq!(deadline.elapsed(), Duration::ZERO);
        assert!(!deadline.is_expired());
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
