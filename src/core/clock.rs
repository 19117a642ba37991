//! Frame clock: paces the loop and provides the monotonic timestamp
//! every kinematic formula is parameterized on.

use std::thread;
use std::time::{Duration, Instant};

/// Paces iterations to a target frame rate and serves as the time origin.
///
/// `tick` is the single sleep point of the whole game loop.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    origin: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        let now = Instant::now();
        Self {
            interval: Duration::from_micros(1_000_000 / u64::from(frames_per_second.max(1))),
            origin: now,
            last_tick: now,
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspend until at least one frame interval has elapsed since the
    /// previous tick returned, then return the current timestamp.
    ///
    /// If the caller overran the budget this returns immediately; dropped
    /// frames are absorbed, not compensated. The last-tick stamp is taken at
    /// the time of return, so overrun work pushes subsequent frames later
    /// (accepted minor drift).
    pub fn tick(&mut self) -> u64 {
        if let Some(remaining) = self.interval.checked_sub(self.last_tick.elapsed()) {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
        self.now_ms()
    }
}
