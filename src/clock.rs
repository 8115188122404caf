use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Reads the platform's steady clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a [`Stopwatch`](crate::Stopwatch).
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get().saturating_add(by));
    }

    /// Moves to `offset` past the base instant. Ignored if that would move
    /// time backward.
    pub fn set(&self, offset: Duration) {
        if offset > self.offset.get() {
            self.offset.set(offset);
        }
    }

    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// A point in time read from a [`Clock`], or the origin that orders before
/// every reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(Option<Instant>);

impl TimePoint {
    pub const ORIGIN: TimePoint = TimePoint(None);

    pub fn instant(self) -> Option<Instant> {
        self.0
    }

    pub fn is_origin(self) -> bool {
        self.0.is_none()
    }

    /// Zero when either side is the origin or `earlier` is actually later.
    pub fn saturating_duration_since(self, earlier: TimePoint) -> Duration {
        match (self.0, earlier.0) {
            (Some(now), Some(earlier)) => now.saturating_duration_since(earlier),
            _ => Duration::ZERO,
        }
    }
}

impl From<Instant> for TimePoint {
    fn from(instant: Instant) -> Self {
        Self(Some(instant))
    }
}
