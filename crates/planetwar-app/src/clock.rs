//! Fixed-timestep pacing.
//!
//! The simulation advances in whole ticks of `1 / tick_rate` seconds. Wall
//! time accumulates between polls and is converted into due ticks; a stalled
//! host catches up by at most [`MAX_CATCH_UP`] ticks per poll and drops the
//! rest.

use std::time::{Duration, Instant};

/// Upper bound on ticks handed out by a single poll.
pub const MAX_CATCH_UP: u32 = 5;

/// Converts elapsed wall time into simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: Duration,
    accumulator: Duration,
    last: Instant,
}

impl FixedClock {
    /// Creates a clock for `tick_rate` ticks per second, starting at `now`.
    pub fn new(tick_rate: u32, now: Instant) -> Self {
        Self {
            step: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
            last: now,
        }
    }

    /// Duration of one tick.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Returns how many ticks are due at `now`.
    pub fn due(&mut self, now: Instant) -> u32 {
        self.accumulator += now.saturating_duration_since(self.last);
        self.last = now;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_CATCH_UP {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_CATCH_UP && self.accumulator >= self.step {
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time left until the next tick is due, measured from `now`.
    pub fn until_next(&self, now: Instant) -> Duration {
        let since = now.saturating_duration_since(self.last);
        self.step.saturating_sub(self.accumulator + since)
    }
}
