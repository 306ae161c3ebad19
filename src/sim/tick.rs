//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Intents are
//! applied first, then `ticks` fixed steps run; every step updates the ball
//! before the platform.

use super::collision::{below_playfield, resolve_ceiling, resolve_platform};
use super::state::{Ball, GameState, Intent, Platform};
use crate::tuning::Tuning;

/// Apply a single player intent
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::Accelerate(held) => state.ball.accelerated = held,
        Intent::Lock => {
            if state.lock().is_none() {
                log::debug!("Lock ignored: platform already locked");
            }
        }
    }
}

/// Apply queued intents in order, then advance `ticks` fixed steps
pub fn update<I>(state: &mut GameState, intents: I, ticks: u32)
where
    I: IntoIterator<Item = Intent>,
{
    for intent in intents {
        apply_intent(state, intent);
    }
    for _ in 0..ticks {
        tick(state);
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;
    update_ball(&mut state.ball, &state.platform, &state.tuning);
    update_platform(&mut state.platform, state.tuning.playfield_width);
}

/// Integrate gravity, then resolve platform, ceiling and fall-through in that
/// order. A respawn overrides anything earlier in the same tick.
///
/// The fall-through test looks at the position after this tick's motion, not
/// the one the tick started from. A ball that starts below the floor but
/// moves back into the playfield during the tick is not respawned.
pub fn update_ball(ball: &mut Ball, platform: &Platform, tuning: &Tuning) {
    let gravity = if ball.accelerated {
        ball.gravity * tuning.boost_factor
    } else {
        ball.gravity
    };
    ball.dy += gravity;
    ball.pos.y += ball.dy;

    // Judged on the integrated position, before a bounce can pull the ball
    // back up from under the platform
    let fell_out = below_playfield(ball, tuning);

    resolve_platform(ball, platform, tuning.bounce_damping);
    resolve_ceiling(ball);

    if fell_out || below_playfield(ball, tuning) {
        ball.respawn(tuning);
    }
}

/// Oscillate the current platform between the playfield walls
pub fn update_platform(platform: &mut Platform, playfield_width: f32) {
    platform.advance(playfield_width);
}
