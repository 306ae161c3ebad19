//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (queued as intents)
//! - Frame timing (injectable clock)

pub mod clock;
pub mod input;

pub use clock::{FixedClock, FrameClock, ScriptedClock};
pub use input::{InputQueue, KEY_ACCELERATE, KEY_LOCK};
