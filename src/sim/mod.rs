//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as queued intents, applied before the tick
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod lock;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{ball_platform_contact, below_playfield, resolve_ceiling, resolve_platform};
pub use lock::{LockOutcome, lock_and_advance, spawn_next};
pub use state::{Ball, GameEvent, GameState, Intent, Platform, Tower};
pub use tick::{apply_intent, tick, update, update_ball, update_platform};
