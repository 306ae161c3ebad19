//! Platform locking and overlap clipping
//!
//! When the player locks the oscillating platform it is clipped to the part
//! that overlaps the tower top, appended to the tower, and a new platform of
//! the clipped width is spawned one step higher. The tower can only narrow.

use super::state::{Platform, Tower};
use crate::span_overlap;
use crate::tuning::Tuning;

/// Result of a successful lock
#[derive(Debug, Clone, PartialEq)]
pub struct LockOutcome {
    /// Snapshot appended to the tower
    pub locked: Platform,
    /// Platform to oscillate next
    pub next: Platform,
    /// The lock missed the tower top and `locked.width` is zero
    pub degenerate: bool,
    /// Upward camera shift to issue for this lock
    pub camera_shift: f32,
}

/// Lock `current` onto `tower` and compute the next platform.
///
/// Returns `None` without touching anything if `current` is already locked.
/// The caller is responsible for replacing `current` with `outcome.next`.
pub fn lock_and_advance(
    current: &mut Platform,
    tower: &mut Tower,
    tuning: &Tuning,
) -> Option<LockOutcome> {
    if current.locked {
        return None;
    }
    current.locked = true;

    let mut degenerate = false;
    if let Some(previous) = tower.last() {
        let (left, width) = span_overlap(
            current.left(),
            current.right(),
            previous.left(),
            previous.right(),
        );
        if width > 0.0 {
            current.pos.x = left;
            current.width = width;
        } else {
            current.width = 0.0;
            degenerate = true;
        }
    }

    let locked = current.clone();
    tower.push(locked.clone());

    let next = spawn_next(tower, locked.width, tuning);
    log::debug!(
        "Locked level {} at x={} width={}",
        tower.len() - 1,
        locked.pos.x,
        locked.width
    );

    Some(LockOutcome {
        locked,
        next,
        degenerate,
        camera_shift: tuning.camera_shift,
    })
}

/// Spawn a centered platform one step above the tower top (or at the base
/// if the tower is empty), inheriting `width`.
pub fn spawn_next(tower: &Tower, width: f32, tuning: &Tuning) -> Platform {
    let y = match tower.top_y() {
        Some(top) => top - tuning.stack_step,
        None => tuning.base_y(),
    };
    Platform::new(tuning.spawn_x(width), y, width, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower_with(platforms: &[Platform]) -> Tower {
        let mut tower = Tower::new();
        for p in platforms {
            let mut p = p.clone();
            p.locked = true;
            tower.push(p);
        }
        tower
    }

    #[test]
    fn test_first_lock_keeps_full_width() {
        let tuning = Tuning::default();
        let mut tower = Tower::new();
        let mut current = Platform::new(60.0, tuning.base_y(), 150.0, &tuning);

        let outcome = lock_and_advance(&mut current, &mut tower, &tuning).unwrap();
        assert!(!outcome.degenerate);
        assert_eq!(outcome.locked.pos.x, 60.0);
        assert_eq!(outcome.locked.width, 150.0);
        assert_eq!(tower.len(), 1);

        assert_eq!(outcome.next.width, 150.0);
        assert_eq!(outcome.next.pos.x, 125.0);
        assert_eq!(outcome.next.pos.y, 500.0);
        assert!(!outcome.next.locked);
        assert_eq!(outcome.camera_shift, 50.0);
    }

    #[test]
    fn test_partial_overlap_clips_to_interval() {
        let tuning = Tuning::default();
        let previous = Platform::new(100.0, 550.0, 150.0, &tuning);
        let mut tower = tower_with(&[previous]);
        let mut current = Platform::new(125.0, 500.0, 150.0, &tuning);

        let outcome = lock_and_advance(&mut current, &mut tower, &tuning).unwrap();
        assert!(!outcome.degenerate);
        assert_eq!(outcome.locked.pos.x, 125.0);
        assert_eq!(outcome.locked.width, 125.0);
        assert_eq!(tower.last(), Some(&outcome.locked));

        // Next platform inherits the clipped width, centered in a 400-wide field
        assert_eq!(outcome.next.width, 125.0);
        assert_eq!(outcome.next.pos.x, 137.5);
        assert_eq!(outcome.next.pos.y, 450.0);
    }

    #[test]
    fn test_overhang_on_the_left_is_clipped() {
        let tuning = Tuning::default();
        let mut tower = tower_with(&[Platform::new(100.0, 550.0, 150.0, &tuning)]);
        let mut current = Platform::new(40.0, 500.0, 150.0, &tuning);

        let outcome = lock_and_advance(&mut current, &mut tower, &tuning).unwrap();
        assert_eq!(outcome.locked.pos.x, 100.0);
        assert_eq!(outcome.locked.width, 90.0);
    }

    #[test]
    fn test_no_overlap_collapses_to_zero_width() {
        let tuning = Tuning::default();
        let mut tower = tower_with(&[Platform::new(0.0, 550.0, 150.0, &tuning)]);
        let mut current = Platform::new(400.0, 500.0, 150.0, &tuning);

        let outcome = lock_and_advance(&mut current, &mut tower, &tuning).unwrap();
        assert!(outcome.degenerate);
        assert_eq!(outcome.locked.width, 0.0);
        // x is left where the platform was
        assert_eq!(outcome.locked.pos.x, 400.0);
        assert_eq!(outcome.next.width, 0.0);
        assert_eq!(outcome.next.pos.x, 200.0);
    }

    #[test]
    fn test_touching_edges_is_degenerate() {
        let tuning = Tuning::default();
        let mut tower = tower_with(&[Platform::new(0.0, 550.0, 150.0, &tuning)]);
        let mut current = Platform::new(150.0, 500.0, 150.0, &tuning);

        let outcome = lock_and_advance(&mut current, &mut tower, &tuning).unwrap();
        assert!(outcome.degenerate);
        assert_eq!(outcome.locked.width, 0.0);
    }

    #[test]
    fn test_second_lock_is_noop() {
        let tuning = Tuning::default();
        let mut tower = tower_with(&[Platform::new(100.0, 550.0, 150.0, &tuning)]);
        let mut current = Platform::new(125.0, 500.0, 150.0, &tuning);

        assert!(lock_and_advance(&mut current, &mut tower, &tuning).is_some());
        let snapshot = tower.clone();
        let locked = current.clone();

        assert!(lock_and_advance(&mut current, &mut tower, &tuning).is_none());
        assert_eq!(tower, snapshot);
        assert_eq!(current, locked);
    }

    #[test]
    fn test_spawn_next_on_empty_tower_uses_base() {
        let tuning = Tuning::default();
        let next = spawn_next(&Tower::new(), 150.0, &tuning);
        assert_eq!(next.pos.x, 125.0);
        assert_eq!(next.pos.y, 550.0);
    }
}
