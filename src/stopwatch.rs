use crate::clock::{Clock, MonotonicClock, TimePoint};
use std::time::Duration;

/// Measures running and stopped time across start/stop cycles.
///
/// A fresh stopwatch is stopped and has never been started: both time points
/// sit at [`TimePoint::ORIGIN`] and both durations are zero. Time spent
/// stopped only counts once the stopwatch has been started at least once.
///
/// Mutation takes `&mut self`; share one between threads behind a lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch<C = MonotonicClock> {
    clock: C,
    running: bool,
    start_time: TimePoint,
    stop_time: TimePoint,
    run_duration: Duration,
    stop_duration: Duration,
}

/// Both durations of a [`Stopwatch`] taken from a single clock reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elapsed {
    pub running: bool,
    pub run: Duration,
    pub stop: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            running: false,
            start_time: TimePoint::ORIGIN,
            stop_time: TimePoint::ORIGIN,
            run_duration: Duration::ZERO,
            stop_duration: Duration::ZERO,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts the stopwatch. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        self.start_with(false)
    }

    /// Starts the stopwatch, restarting the current run if it is already
    /// running. Always returns `true`.
    pub fn restart(&mut self) -> bool {
        self.start_with(true)
    }

    /// Starts the stopwatch.
    ///
    /// When already running, `force` decides between a no-op (`false` is
    /// returned) and a restart: the current run is folded into the run time,
    /// a new run begins now and the stopped time of the cycle is cleared.
    pub fn start_with(&mut self, force: bool) -> bool {
        if self.running && !force {
            tracing::debug!(start_time = ?self.start_time, "stopwatch is already running");
            return false;
        }

        let now = TimePoint::from(self.clock.now());

        if self.running {
            self.run_duration = self
                .run_duration
                .saturating_add(now.saturating_duration_since(self.start_time));
            self.stop_duration = Duration::ZERO;
            self.start_time = now;

            tracing::trace!(run = ?self.run_duration, "stopwatch restarted");
            return true;
        }

        // Zero on the first start, since stop_time is still the origin.
        self.stop_duration = self
            .stop_duration
            .saturating_add(now.saturating_duration_since(self.stop_time));
        self.start_time = now;
        self.running = true;

        tracing::trace!(stop = ?self.stop_duration, "stopwatch started");
        true
    }

    /// Stops the stopwatch. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            tracing::debug!(stop_time = ?self.stop_time, "stopwatch is not running");
            return false;
        }

        let now = TimePoint::from(self.clock.now());

        self.run_duration = self
            .run_duration
            .saturating_add(now.saturating_duration_since(self.start_time));
        self.stop_time = now;
        self.running = false;

        tracing::trace!(run = ?self.run_duration, "stopwatch stopped");
        true
    }

    /// Returns to the never-started state.
    pub fn reset(&mut self) {
        self.running = false;
        self.start_time = TimePoint::ORIGIN;
        self.stop_time = TimePoint::ORIGIN;
        self.run_duration = Duration::ZERO;
        self.stop_duration = Duration::ZERO;

        tracing::trace!("stopwatch reset");
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn start_time(&self) -> TimePoint {
        self.start_time
    }

    pub fn stop_time(&self) -> TimePoint {
        self.stop_time
    }

    /// Total time spent running, including the current run.
    pub fn elapsed_run_time(&self) -> Duration {
        self.elapsed().run
    }

    /// Total time spent stopped since the first start, including the current
    /// stop.
    pub fn elapsed_stop_time(&self) -> Duration {
        self.elapsed().stop
    }

    pub fn elapsed(&self) -> Elapsed {
        let now = TimePoint::from(self.clock.now());

        if self.running {
            Elapsed {
                running: true,
                run: self
                    .run_duration
                    .saturating_add(now.saturating_duration_since(self.start_time)),
                stop: self.stop_duration,
            }
        } else {
            Elapsed {
                running: false,
                run: self.run_duration,
                stop: self
                    .stop_duration
                    .saturating_add(now.saturating_duration_since(self.stop_time)),
            }
        }
    }
}

impl<C, D> PartialEq<Stopwatch<D>> for Stopwatch<C> {
    fn eq(&self, other: &Stopwatch<D>) -> bool {
        self.running == other.running
            && self.start_time == other.start_time
            && self.stop_time == other.stop_time
            && self.run_duration == other.run_duration
            && self.stop_duration == other.stop_duration
    }
}

impl<C> Eq for Stopwatch<C> {}
