//! Elapsed-time measurement for arbitrary calls.
//!
//! Any computation can be timed by wrapping it in [`measure`]; the wrapped
//! closure's result is handed back untouched together with the duration.

use std::time::{Duration, Instant};

/// A source of monotonic time.
pub trait Clock {
    /// A point in time as reported by this clock.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the time elapsed since `since`.
    fn elapsed(&self, since: Self::Instant) -> Duration;
}

/// The system's monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: Instant) -> Duration {
        since.elapsed()
    }
}

/// A value together with the time it took to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed<T> {
    /// The computed value.
    pub value: T,
    /// Wall time spent computing it.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Splits into the value and the elapsed time.
    #[must_use]
    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }

    /// Transforms the value, keeping the measured duration.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Runs `f` and measures it against `clock`.
pub fn measure_with<C, T, F>(clock: &C, label: &str, f: F) -> Timed<T>
where
    C: Clock,
    F: FnOnce() -> T,
{
    let start = clock.now();
    let value = f();
    let elapsed = clock.elapsed(start);
    tracing::trace!(label, elapsed_ns = saturating_nanos(elapsed), "measured");
    Timed { value, elapsed }
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Runs `f` and measures it against the monotonic clock.
pub fn measure<T, F>(label: &str, f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    measure_with(&MonotonicClock, label, f)
}
