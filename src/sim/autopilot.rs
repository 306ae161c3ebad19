//! Idle/demo mode: locks the platform when it lines up with the tower top

use super::state::GameState;

/// Default alignment tolerance in playfield units
pub const DEFAULT_TOLERANCE: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// How far the platform's left edge may be from its target
    pub tolerance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Autopilot {
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Left edge the current platform should be locked at
    pub fn target_x(&self, state: &GameState) -> f32 {
        match state.tower.last() {
            Some(top) => top.pos.x,
            None => state.tuning.spawn_x(state.platform.width),
        }
    }

    /// Whether a lock now would keep (almost) the whole platform
    pub fn wants_lock(&self, state: &GameState) -> bool {
        let platform = &state.platform;
        !platform.locked
            && platform.speed != 0.0
            && (platform.pos.x - self.target_x(state)).abs() <= self.tolerance
    }
}
