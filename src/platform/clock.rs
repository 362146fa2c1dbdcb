//! Fixed-rate frame clock
//!
//! Paces the loop to a target frame rate and reports the real elapsed time,
//! which is what the simulation scales by.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame: Duration,
}

impl FrameClock {
    /// `target_fps` of 0 disables pacing
    pub fn new(target_fps: u32) -> Self {
        let frame = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        };
        Self {
            last: Instant::now(),
            frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep out the rest of the frame, then return seconds since the last tick
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last + self.frame;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
