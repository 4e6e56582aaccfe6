//! Frame clock with fixed-interval accumulator

use std::time::{Duration, Instant};

/// Tracks wall time and releases one frame per elapsed interval
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last tick in seconds
    pub delta_time: f64,
    /// Interval between frames in seconds (default: 50ms)
    pub frame_interval: f64,
    /// Accumulated time not yet consumed by frames
    accumulator: f64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_interval: 0.05,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Create a frame clock with the default 50ms interval
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            frame_interval: interval.as_secs_f64(),
            ..Self::default()
        }
    }

    /// Advance the clock. The first tick only starts timing and releases one frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.accumulator = self.frame_interval;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        // A stalled process catches up by at most a few frames
        self.delta_time = elapsed.min(self.frame_interval * 4.0);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Returns true if a frame is due
    pub fn frame_due(&self) -> bool {
        self.accumulator >= self.frame_interval
    }

    /// Consume one frame interval from the accumulator
    pub fn consume_frame(&mut self) {
        self.accumulator -= self.frame_interval;
    }

    /// How long until the next frame is due
    pub fn time_until_next(&self) -> Duration {
        Duration::from_secs_f64((self.frame_interval - self.accumulator).max(0.0))
    }
}
