//! Collision detection and response for the ball
//!
//! The ball only moves vertically. It bounces off the top of the current
//! platform (with damping), off the ceiling (without damping), and respawns
//! once it drops out through the bottom of the playfield.

use super::state::{Ball, Platform};
use crate::tuning::Tuning;

/// Whether the ball is landing on the platform this tick.
///
/// Requires the ball's lower edge to reach or cross the platform top, its
/// center to be over the platform, and the ball to be moving down. Locked
/// platforms are never collided with.
pub fn ball_platform_contact(ball: &Ball, platform: &Platform) -> bool {
    !platform.locked
        && ball.bottom() >= platform.top()
        && platform.spans_x(ball.pos.x)
        && ball.dy > 0.0
}

/// Snap the ball onto the platform top and reflect `dy` with damping.
///
/// Returns true if a bounce happened.
pub fn resolve_platform(ball: &mut Ball, platform: &Platform, damping: f32) -> bool {
    if !ball_platform_contact(ball, platform) {
        return false;
    }
    ball.pos.y = platform.top() - ball.radius;
    ball.dy = -ball.dy * damping;
    true
}

/// Clamp the ball below the ceiling and reflect `dy` (no damping).
///
/// Returns true if the ball touched the ceiling.
pub fn resolve_ceiling(ball: &mut Ball) -> bool {
    if ball.top() >= 0.0 {
        return false;
    }
    ball.pos.y = ball.radius;
    ball.dy = -ball.dy;
    true
}

/// Whether the ball is completely below the playfield
#[inline]
pub fn below_playfield(ball: &Ball, tuning: &Tuning) -> bool {
    ball.top() > tuning.playfield_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Tuning, Ball, Platform) {
        let tuning = Tuning::default();
        let ball = Ball::new(&tuning);
        let platform = Platform::new(125.0, 550.0, 150.0, &tuning);
        (tuning, ball, platform)
    }

    #[test]
    fn test_contact_requires_downward_motion() {
        let (_, mut ball, platform) = setup();
        ball.pos = Vec2::new(200.0, 540.0);
        ball.dy = 3.0;
        assert!(ball_platform_contact(&ball, &platform));

        ball.dy = -3.0;
        assert!(!ball_platform_contact(&ball, &platform));

        ball.dy = 0.0;
        assert!(!ball_platform_contact(&ball, &platform));
    }

    #[test]
    fn test_contact_requires_horizontal_overlap() {
        let (_, mut ball, platform) = setup();
        ball.dy = 3.0;
        ball.pos = Vec2::new(124.0, 540.0);
        assert!(!ball_platform_contact(&ball, &platform));

        // Both edges count as over the platform
        ball.pos.x = 125.0;
        assert!(ball_platform_contact(&ball, &platform));
        ball.pos.x = 275.0;
        assert!(ball_platform_contact(&ball, &platform));
        ball.pos.x = 275.5;
        assert!(!ball_platform_contact(&ball, &platform));
    }

    #[test]
    fn test_contact_ignores_locked_platform() {
        let (_, mut ball, mut platform) = setup();
        ball.pos = Vec2::new(200.0, 540.0);
        ball.dy = 3.0;
        platform.locked = true;
        assert!(!ball_platform_contact(&ball, &platform));
    }

    #[test]
    fn test_resolve_platform_clamps_and_damps() {
        let (_, mut ball, platform) = setup();
        ball.pos = Vec2::new(200.0, 560.0); // sunk into the platform
        ball.dy = 5.0;

        assert!(resolve_platform(&mut ball, &platform, 0.9));
        assert_eq!(ball.pos.y, 535.0);
        assert_eq!(ball.dy, -5.0 * 0.9);
    }

    #[test]
    fn test_resolve_platform_touching_exactly() {
        let (_, mut ball, platform) = setup();
        ball.pos = Vec2::new(200.0, 535.0);
        ball.dy = 1.0;
        assert!(resolve_platform(&mut ball, &platform, 0.9));
        assert_eq!(ball.pos.y, 535.0);
    }

    #[test]
    fn test_resolve_ceiling_reflects_without_damping() {
        let (_, mut ball, _) = setup();
        ball.pos.y = 10.0;
        ball.dy = -4.0;

        assert!(resolve_ceiling(&mut ball));
        assert_eq!(ball.pos.y, 15.0);
        assert_eq!(ball.dy, 4.0);

        // Exactly touching is not a hit
        assert!(!resolve_ceiling(&mut ball));
    }

    #[test]
    fn test_below_playfield() {
        let (tuning, mut ball, _) = setup();
        // Top edge exactly at the bottom: still inside
        ball.pos = Vec2::new(200.0, 615.0);
        assert!(!below_playfield(&ball, &tuning));

        ball.pos.y = 615.5;
        assert!(below_playfield(&ball, &tuning));
    }
}
