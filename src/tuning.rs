//! Data-driven game balance
//!
//! Every physics and layout constant of the game lives here so a JSON payload
//! can override it. Defaults reproduce the classic 400x600 board.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Physics and layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub ball_radius: f32,
    pub ball_spawn_y: f32,
    pub ball_spawn_dy: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Gravity multiplier while the accelerate input is held
    pub boost_factor: f32,
    /// Speed kept after a platform bounce (0.9 = lose 10%)
    pub bounce_damping: f32,

    pub platform_width: f32,
    pub platform_height: f32,
    /// Horizontal speed per tick; the platform starts moving right
    pub platform_speed: f32,
    /// First platform sits this far above the playfield bottom
    pub base_offset: f32,
    /// Vertical distance between tower levels
    pub stack_step: f32,
    /// Camera shift issued on every lock
    pub camera_shift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_spawn_y: BALL_SPAWN_Y,
            ball_spawn_dy: BALL_SPAWN_DY,
            gravity: GRAVITY,
            boost_factor: BOOST_FACTOR,
            bounce_damping: BOUNCE_DAMPING,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_speed: PLATFORM_SPEED,
            base_offset: BASE_OFFSET,
            stack_step: STACK_STEP,
            camera_shift: CAMERA_SHIFT,
        }
    }
}

/// Reasons a tuning payload is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Payload is not valid JSON for `Tuning`
    #[error("invalid tuning JSON: {0}")]
    Parse(String),

    /// A field is NaN or infinite
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    /// A size or rate is zero or negative
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    /// A speed or offset that may be zero is negative
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// Damping must lie in (0, 1]
    #[error("bounce_damping must be in (0, 1] (got {0})")]
    DampingOutOfRange(f32),

    /// Starting platform does not fit inside the playfield
    #[error("platform_width {width} does not fit playfield_width {playfield}")]
    PlatformTooWide { width: f32, playfield: f32 },
}

impl Tuning {
    /// Parse and validate a JSON payload (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with. NaN and infinities are
    /// refused on every field.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ball_radius", self.ball_radius),
            ("ball_spawn_y", self.ball_spawn_y),
            ("ball_spawn_dy", self.ball_spawn_dy),
            ("gravity", self.gravity),
            ("boost_factor", self.boost_factor),
            ("bounce_damping", self.bounce_damping),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("platform_speed", self.platform_speed),
            ("base_offset", self.base_offset),
            ("stack_step", self.stack_step),
            ("camera_shift", self.camera_shift),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field, value });
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ball_radius", self.ball_radius),
            ("gravity", self.gravity),
            ("boost_factor", self.boost_factor),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("stack_step", self.stack_step),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Zero is allowed here (a platform with zero speed stays parked)
        let non_negative = [
            ("platform_speed", self.platform_speed),
            ("base_offset", self.base_offset),
            ("camera_shift", self.camera_shift),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(self.bounce_damping > 0.0 && self.bounce_damping <= 1.0) {
            return Err(TuningError::DampingOutOfRange(self.bounce_damping));
        }

        if self.platform_width > self.playfield_width {
            return Err(TuningError::PlatformTooWide {
                width: self.platform_width,
                playfield: self.playfield_width,
            });
        }

        Ok(())
    }

    /// Top edge of the first (bottom) platform
    #[inline]
    pub fn base_y(&self) -> f32 {
        self.playfield_height - self.base_offset
    }

    /// Left edge that centers a platform of `width` in the playfield
    #[inline]
    pub fn spawn_x(&self, width: f32) -> f32 {
        (self.playfield_width - width) / 2.0
    }

    /// Ball respawn point
    #[inline]
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.playfield_width / 2.0, self.ball_spawn_y)
    }
}
