//! Frame pacing for the driver loop
//!
//! The simulation is advanced at most once per frame interval. A poll that arrives
//! too early is skipped, not queued: falling behind never causes a burst of catch-up ticks.

use std::time::{Duration, Instant};

use crate::consts::FRAME_TIME_MS;

/// Gate that opens once per elapsed frame interval
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    last: Instant,
}

impl FrameGate {
    /// Create a gate with the default ~60 Hz interval, starting now
    pub fn new(now: Instant) -> Self {
        Self::with_interval(now, Duration::from_millis(FRAME_TIME_MS))
    }

    pub fn with_interval(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Returns true (and restarts the interval) if a tick is due at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last))
    }
}
