//! Learner profile
//!
//! In-memory aggregate of a learner's progression state. The stored level
//! is always recomputed from the experience total, never set directly, so
//! the two can't drift apart. Persistence belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::progression::{
    GalaxyInfo, LevelProgress, ProgressionError, checked_xp, galaxy_info, level_from_xp,
    level_progress,
};

/// A learner's progression state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Cumulative experience; never decreases
    pub experience_points: u64,
    /// Lifetime points, tracked alongside XP for leaderboards
    pub total_points: u64,
    /// Badges earned
    pub badges_count: u32,
    /// Derived level, always `level_from_xp(experience_points)`
    level: u32,
}

/// Outcome of an XP grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    /// XP added by this grant
    pub xp_granted: u64,
    /// Level before the grant
    pub previous_level: u32,
    /// Level after the grant
    pub new_level: u32,
    /// Whether the grant crossed at least one level boundary
    pub leveled_up: bool,
    /// Whether the grant moved the learner into a new galaxy
    pub galaxy_changed: bool,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            experience_points: 0,
            total_points: 0,
            badges_count: 0,
            level: 1,
        }
    }
}

impl LearnerProfile {
    /// Create a fresh profile at level 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a profile from a raw stored experience total
    ///
    /// The level is recomputed from scratch; a negative total is rejected.
    pub fn from_raw_xp(raw_xp: i64) -> Result<Self, ProgressionError> {
        let experience_points = checked_xp(raw_xp)?;
        Ok(Self {
            experience_points,
            total_points: experience_points,
            badges_count: 0,
            level: level_from_xp(experience_points),
        })
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Galaxy coordinates of the current level
    pub fn galaxy(&self) -> GalaxyInfo {
        // level is only ever written by level_from_xp, which stays in range
        galaxy_info(self.level).unwrap_or(GalaxyInfo {
            galaxy: 1,
            level_in_galaxy: 1,
        })
    }

    /// Progress within the current level
    pub fn level_progress(&self) -> LevelProgress {
        level_progress(self.experience_points)
    }

    /// Grant XP and recompute the level
    pub fn grant_xp(&mut self, amount: u64) -> XpAward {
        let previous_level = self.level;
        let previous_galaxy = self.galaxy().galaxy;

        self.experience_points = self.experience_points.saturating_add(amount);
        self.total_points = self.total_points.saturating_add(amount);
        self.level = level_from_xp(self.experience_points);

        let award = XpAward {
            xp_granted: amount,
            previous_level,
            new_level: self.level,
            leveled_up: self.level > previous_level,
            galaxy_changed: self.galaxy().galaxy != previous_galaxy,
        };

        if award.leveled_up {
            log::info!(
                "Level up: {} -> {} ({} xp total)",
                award.previous_level,
                award.new_level,
                self.experience_points
            );
        }

        award
    }

    /// Record a badge
    pub fn record_badge(&mut self) {
        self.badges_count += 1;
    }
}
