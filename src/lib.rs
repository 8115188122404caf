//! A stopwatch that tracks both running and stopped time on a monotonic clock.

pub mod clock;
pub mod stopwatch;

pub use crate::clock::{Clock, ManualClock, MonotonicClock, TimePoint};
pub use crate::stopwatch::{Elapsed, Stopwatch};
