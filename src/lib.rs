//! Stack Drop - a bouncing-ball tower stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, platform motion, lock/overlap, tower)
//! - `game`: Fixed timestep frame driver
//! - `renderer`: Drawing surface abstraction and camera
//! - `platform`: Input queue and frame clock abstractions
//! - `tuning`: Data-driven game balance
//! - `settings`: User preferences (colors, idle mode)

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Frame, FrameReport, Frames, Game, run};
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. One tick is one frame of a 60 Hz display,
    /// so per-tick constants (gravity, platform speed) read as "per frame".
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted by the frame driver (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;
    pub const BALL_SPAWN_DY: f32 = 2.0;
    /// Gravity, added to dy every tick
    pub const GRAVITY: f32 = 0.1;
    /// Gravity multiplier while accelerating down
    pub const BOOST_FACTOR: f32 = 2.0;
    /// Fraction of vertical speed kept after a platform bounce
    pub const BOUNCE_DAMPING: f32 = 0.9;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_SPEED: f32 = 3.0;
    /// Distance from the playfield bottom to the first platform's top edge
    pub const BASE_OFFSET: f32 = 50.0;
    /// Vertical distance between stacked platforms
    pub const STACK_STEP: f32 = 50.0;
    /// Camera shift issued per lock
    pub const CAMERA_SHIFT: f32 = 50.0;
}

/// Overlap of two horizontal spans `[a_left, a_right]` and `[b_left, b_right]`.
///
/// Returns `(left, width)`; `width` is zero or negative when the spans are disjoint.
#[inline]
pub fn span_overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> (f32, f32) {
    let left = a_left.max(b_left);
    let right = a_right.min(b_right);
    (left, right - left)
}
