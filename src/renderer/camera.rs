//! Vertical camera
//!
//! The simulation never moves; each lock only announces a shift. The camera
//! sums those shifts so the view follows the tower as it grows upward.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Total shift applied to every world y coordinate
    pub offset: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift(&mut self, amount: f32) {
        self.offset += amount;
    }

    /// Consume any `CameraShift` among `events`
    pub fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::CameraShift { offset } = event {
                self.shift(*offset);
            }
        }
    }

    /// World y to screen y
    #[inline]
    pub fn apply(&self, y: f32) -> f32 {
        y + self.offset
    }
}
