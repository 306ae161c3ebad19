//! Game state and core simulation types
//!
//! Ball, the oscillating platform, and the tower of locked platforms.
//! Everything here is plain data; the per-tick rules live in `tick`,
//! `collision` and `lock`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::lock::{LockOutcome, lock_and_advance};
use crate::tuning::Tuning;

/// Discrete player intents, queued by input handlers and applied at the
/// start of the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Accelerate-down pressed (`true`) or released (`false`)
    Accelerate(bool),
    /// Lock the current platform onto the tower
    Lock,
}

/// Notable things that happened during an update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A platform was locked as tower level `level` (0 = bottom)
    Locked { level: usize, x: f32, width: f32 },
    /// A lock missed the tower top entirely and the new level has zero width
    StackCollapsed { level: usize },
    /// Draws should move by `offset` on top of earlier shifts
    CameraShift { offset: f32 },
}

/// The falling/bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive = down)
    pub dy: f32,
    /// Gravity added to `dy` each tick
    pub gravity: f32,
    /// Accelerate-down input is held
    pub accelerated: bool,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.ball_spawn(),
            radius: tuning.ball_radius,
            dy: tuning.ball_spawn_dy,
            gravity: tuning.gravity,
            accelerated: false,
        }
    }

    /// Reset to the spawn point. Radius, gravity and the input flag are kept.
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.pos = tuning.ball_spawn();
        self.dy = tuning.ball_spawn_dy;
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }
}

/// An axis-aligned platform. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed per tick; flips sign at the playfield walls
    pub speed: f32,
    pub locked: bool,
}

impl Platform {
    /// A fresh, unlocked platform with its left edge at `x`
    pub fn new(x: f32, y: f32, width: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height: tuning.platform_height,
            speed: tuning.platform_speed,
            locked: false,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Whether `x` lies within the platform's horizontal extent (edges included)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// Oscillate between the playfield walls. Locked platforms never move.
    ///
    /// `x` is not clamped, so it may overshoot a wall by up to one speed unit.
    pub fn advance(&mut self, playfield_width: f32) {
        if self.locked {
            return;
        }
        self.pos.x += self.speed;
        if self.pos.x <= 0.0 || self.right() >= playfield_width {
            self.speed = -self.speed;
        }
    }
}

/// Locked platforms, oldest (bottom) first. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    levels: Vec<Platform>,
}

impl Tower {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    pub(crate) fn push(&mut self, platform: Platform) {
        debug_assert!(platform.locked);
        self.levels.push(platform);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The most recently locked platform (tower top)
    pub fn last(&self) -> Option<&Platform> {
        self.levels.last()
    }

    pub fn get(&self, level: usize) -> Option<&Platform> {
        self.levels.get(level)
    }

    /// Bottom-up iteration
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.levels.iter()
    }

    /// Top edge of the tower top, if any
    pub fn top_y(&self) -> Option<f32> {
        self.last().map(Platform::top)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub ball: Ball,
    /// The platform currently oscillating (always unlocked between updates)
    pub platform: Platform,
    pub tower: Tower,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let width = tuning.platform_width;
        let platform = Platform::new(tuning.spawn_x(width), tuning.base_y(), width, &tuning);
        Self {
            ball: Ball::new(&tuning),
            platform,
            tower: Tower::new(),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Lock the current platform onto the tower and spawn the next one.
    ///
    /// Returns the outcome, or `None` if the current platform was already locked.
    pub fn lock(&mut self) -> Option<LockOutcome> {
        let outcome = lock_and_advance(&mut self.platform, &mut self.tower, &self.tuning)?;
        let level = self.tower.len() - 1;

        self.events.push(GameEvent::Locked {
            level,
            x: outcome.locked.pos.x,
            width: outcome.locked.width,
        });
        if outcome.degenerate {
            self.events.push(GameEvent::StackCollapsed { level });
        }
        self.events.push(GameEvent::CameraShift {
            offset: outcome.camera_shift,
        });

        self.platform = outcome.next.clone();
        Some(outcome)
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
