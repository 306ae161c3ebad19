//! Keyboard input queue
//!
//! Host event handlers push key transitions here; the frame driver drains the
//! resulting intents at the start of the next frame, so only the driver ever
//! mutates game state.

use std::collections::VecDeque;

use crate::sim::Intent;

/// `KeyboardEvent.code` for accelerate-down
pub const KEY_ACCELERATE: &str = "ArrowDown";
/// `KeyboardEvent.code` for lock
pub const KEY_LOCK: &str = "Space";

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<Intent>,
    /// Lock key is down; repeats are dropped until it is released
    lock_held: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    /// Handle a key press. Returns true if the key is bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        match code {
            KEY_ACCELERATE => {
                self.push(Intent::Accelerate(true));
                true
            }
            KEY_LOCK => {
                if !self.lock_held {
                    self.lock_held = true;
                    self.push(Intent::Lock);
                }
                true
            }
            _ => false,
        }
    }

    /// Handle a key release. Returns true if the key is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        match code {
            KEY_ACCELERATE => {
                self.push(Intent::Accelerate(false));
                true
            }
            KEY_LOCK => {
                self.lock_held = false;
                true
            }
            _ => false,
        }
    }

    /// Take every queued intent, oldest first
    pub fn drain(&mut self) -> Vec<Intent> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
