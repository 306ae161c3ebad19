//! Frame clocks
//!
//! The browser build is driven by `requestAnimationFrame` timestamps. Anything
//! that wants to pull frames on its own (tests, the headless demo) injects a
//! `FrameClock` instead.

use crate::consts::SIM_DT;

/// Source of frame timestamps in milliseconds
pub trait FrameClock {
    /// Block (or not) until the next frame is due and return its timestamp
    fn next_frame(&mut self) -> f64;

    /// Rewind to the first frame, if the clock supports it
    fn reset(&mut self) {}
}

/// Evenly spaced timestamps, starting at `start_ms`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedClock {
    start_ms: f64,
    interval_ms: f64,
    frame: u64,
}

impl FixedClock {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            start_ms,
            interval_ms,
            frame: 0,
        }
    }

    /// One frame per simulation tick
    pub fn sim_rate() -> Self {
        Self::new(0.0, SIM_DT as f64 * 1000.0)
    }

    /// Frames per second (e.g. 30, 60, 144)
    pub fn at_fps(fps: f64) -> Self {
        Self::new(0.0, 1000.0 / fps)
    }
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> f64 {
        let time = self.start_ms + self.frame as f64 * self.interval_ms;
        self.frame += 1;
        time
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}

/// Replays a recorded list of timestamps, then keeps the last interval
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedClock {
    times: Vec<f64>,
    index: usize,
}

impl ScriptedClock {
    pub fn new(times: Vec<f64>) -> Self {
        Self { times, index: 0 }
    }
}

impl FrameClock for ScriptedClock {
    fn next_frame(&mut self) -> f64 {
        let n = self.times.len();
        let time = match n {
            0 => self.index as f64 * SIM_DT as f64 * 1000.0,
            _ if self.index < n => self.times[self.index],
            1 => self.times[0] + (self.index as f64) * SIM_DT as f64 * 1000.0,
            _ => {
                let step = self.times[n - 1] - self.times[n - 2];
                self.times[n - 1] + (self.index + 1 - n) as f64 * step
            }
        };
        self.index += 1;
        time
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}
