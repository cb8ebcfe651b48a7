//! Monotonic clock measuring elapsed [`BasicTime`].

use std::marker::PhantomData;
use std::time::Instant;

use super::constraint::{ClockSource, Scalar, TimeValue};
use super::time::BasicTime;

/// Stopwatch over [`Instant`], reporting elapsed time as `BasicTime<T>`.
///
/// ```
/// use xrn_util::util::Clock;
///
/// let mut clock = Clock::new();
/// let lap = clock.restart();
/// assert!(lap >= 0.0_f32);
/// assert!(!clock.has_elapsed(60_000.0_f32));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BasicClock<T> {
    start: Instant,
    _scalar: PhantomData<T>,
}

/// Default clock type.
pub type Clock = BasicClock<f32>;

impl<T: Scalar> BasicClock<T> {
    /// Start a clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            _scalar: PhantomData,
        }
    }

    /// Time elapsed since the clock was started or last restarted.
    #[must_use]
    pub fn elapsed(&self) -> BasicTime<T> {
        self.start.elapsed().into()
    }

    /// Restart the clock, returning the time elapsed until now.
    pub fn restart(&mut self) -> BasicTime<T> {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.start);
        self.start = now;
        elapsed.into()
    }

    /// Restart the clock, discarding the elapsed time.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Whether at least `amount` has elapsed. Raw values are milliseconds.
    #[must_use]
    pub fn has_elapsed<V>(&self, amount: V) -> bool
    where
        V: TimeValue<Scalar = T>,
    {
        self.elapsed().get() >= amount.as_millis()
    }

    /// Instant the current measurement started at.
    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.start
    }
}

impl<T: Scalar> Default for BasicClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> ClockSource for BasicClock<T> {
    type Scalar = T;

    fn elapsed(&self) -> BasicTime<T> {
        Self::elapsed(self)
    }

    fn restart(&mut self) -> BasicTime<T> {
        Self::restart(self)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}
