//! Monotonic clock adapter.
//!
//! The scheduler only understands "milliseconds since the last tick";
//! this adapter turns `std::time::Instant` into those deltas for the
//! host loop.

use std::time::Instant;

pub struct MonotonicClock {
    start: Instant,
    last_ms: u64,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_ms: 0,
        }
    }

    /// Milliseconds since construction (monotonic).
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Milliseconds elapsed since the previous call, saturated to `u32`.
    pub fn lap_ms(&mut self) -> u32 {
        let now = self.uptime_ms();
        let delta = now.saturating_sub(self.last_ms);
        self.last_ms = now;
        u32::try_from(delta).unwrap_or(u32::MAX)
    }
}
