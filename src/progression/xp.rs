//! Experience and leveling
//!
//! XP cost curve, level computation, and per-level progress reporting.
//! The cost of each level grows super-linearly so that late levels take
//! disproportionately more experience than early ones.

use serde::{Deserialize, Serialize};

use super::error::ProgressionError;

/// Hard cap on levels; surplus XP past this is ignored
pub const MAX_LEVEL: u32 = 1000;

/// XP cost to advance from `level` to `level + 1`
pub fn xp_for_next_level(level: u32) -> u64 {
    let l = level as u64;
    l * (l + 1) * 50
}

/// Total XP needed from level 1 to stand at a given level
pub fn total_xp_for_level(level: u32) -> u64 {
    (1..level).map(xp_for_next_level).sum()
}

/// Compute the level for a cumulative XP total
///
/// Walks the cost curve from level 1, consuming XP until the next level
/// can no longer be afforded. The loop runs at most `MAX_LEVEL` times.
pub fn level_from_xp(total_xp: u64) -> u32 {
    let mut level = 1;
    let mut cumulative = 0u64;
    while level < MAX_LEVEL {
        let cost = xp_for_next_level(level);
        if cumulative + cost > total_xp {
            break;
        }
        cumulative += cost;
        level += 1;
    }
    level
}

/// Validate a raw experience total from an untyped source (JSON body, DB row)
///
/// Negative totals are rejected, not clamped to zero.
pub fn checked_xp(raw: i64) -> Result<u64, ProgressionError> {
    if raw < 0 {
        Err(ProgressionError::NegativeExperience { amount: raw })
    } else {
        Ok(raw as u64)
    }
}

/// Progress within the current level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level
    pub level: u32,
    /// XP earned since reaching the current level
    pub xp_into_level: u64,
    /// XP cost of the next level (0 at the level cap)
    pub xp_for_next: u64,
    /// Completion fraction of the current level, 0.0..=1.0
    pub fraction: f32,
}

/// Break a cumulative XP total down into per-level progress
pub fn level_progress(total_xp: u64) -> LevelProgress {
    let level = level_from_xp(total_xp);
    let xp_into_level = total_xp - total_xp_for_level(level);

    if level >= MAX_LEVEL {
        return LevelProgress {
            level,
            xp_into_level,
            xp_for_next: 0,
            fraction: 1.0,
        };
    }

    let xp_for_next = xp_for_next_level(level);
    LevelProgress {
        level,
        xp_into_level,
        xp_for_next,
        fraction: xp_into_level as f32 / xp_for_next as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(1), 100); // 1 * 2 * 50
        assert_eq!(xp_for_next_level(2), 300); // 2 * 3 * 50
        assert_eq!(xp_for_next_level(3), 600); // 3 * 4 * 50
    }

    #[test]
    fn test_total_xp_for_level() {
        assert_eq!(total_xp_for_level(1), 0);
        assert_eq!(total_xp_for_level(2), 100);
        assert_eq!(total_xp_for_level(3), 400);
        assert_eq!(total_xp_for_level(4), 1000);
    }

    #[test]
    fn test_level_from_xp_boundaries() {
        assert_eq!(level_from_xp(0), 1);
        assert_eq!(level_from_xp(99), 1);
        assert_eq!(level_from_xp(100), 2);
        assert_eq!(level_from_xp(399), 2);
        assert_eq!(level_from_xp(400), 3);
    }

    #[test]
    fn test_level_from_xp_is_capped() {
        assert_eq!(level_from_xp(u64::MAX), MAX_LEVEL);
        assert_eq!(level_from_xp(1_000_000_000_000), MAX_LEVEL);
        assert_eq!(level_from_xp(total_xp_for_level(MAX_LEVEL)), MAX_LEVEL);
    }

    #[test]
    fn test_level_from_xp_monotone() {
        let mut last = 0;
        for xp in (0..2_000_000u64).step_by(731) {
            let level = level_from_xp(xp);
            assert!(level >= last, "level dropped at {} xp", xp);
            last = level;
        }
    }

    #[test]
    fn test_level_from_xp_inverts_cost_curve() {
        for level in [1, 2, 10, 50, 100, 500, 999, 1000] {
            let floor = total_xp_for_level(level);
            assert_eq!(level_from_xp(floor), level);
            if level > 1 {
                assert_eq!(level_from_xp(floor - 1), level - 1);
            }
        }
    }

    #[test]
    fn test_checked_xp() {
        assert_eq!(checked_xp(0), Ok(0));
        assert_eq!(checked_xp(12345), Ok(12345));
        assert_eq!(
            checked_xp(-1),
            Err(ProgressionError::NegativeExperience { amount: -1 })
        );
    }

    #[test]
    fn test_level_progress() {
        let progress = level_progress(0);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.xp_into_level, 0);
        assert_eq!(progress.xp_for_next, 100);
        assert_eq!(progress.fraction, 0.0);

        let progress = level_progress(150);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.xp_into_level, 50);
        assert_eq!(progress.xp_for_next, 300);

        let progress = level_progress(u64::MAX);
        assert_eq!(progress.level, MAX_LEVEL);
        assert_eq!(progress.xp_for_next, 0);
        assert_eq!(progress.fraction, 1.0);
    }
}
