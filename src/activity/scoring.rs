//! Daily activity scoring
//!
//! Maps checklist activity ids to XP and per-trait HP awards. The table is
//! serializable so deployments can tune it from a data file; unknown ids in
//! a submission are skipped and logged rather than failing the whole batch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::profile::{LearnerProfile, XpAward};
use crate::traits::TraitLedger;

/// HP awarded to one trait by one activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitAward {
    pub trait_name: String,
    pub hp: u32,
}

/// What a single activity is worth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityScore {
    pub xp: u64,
    pub traits: Vec<TraitAward>,
}

/// Scoring table keyed by activity id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub entries: BTreeMap<u32, ActivityScore>,
}

/// Accumulated result of scoring a batch of activities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOutcome {
    /// Total XP earned by the batch
    pub xp_total: u64,
    /// HP gained per trait
    pub trait_hp: BTreeMap<String, u32>,
    /// How many activities were scored
    pub scored: u32,
    /// Activity ids with no scoring entry
    pub skipped: Vec<u32>,
}

impl ScoringTable {
    /// Look up the score for an activity
    pub fn get(&self, activity_id: u32) -> Option<&ActivityScore> {
        self.entries.get(&activity_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score a batch of submitted activity ids
    pub fn score(&self, activity_ids: &[u32]) -> ActivityOutcome {
        let mut outcome = ActivityOutcome::default();

        for &id in activity_ids {
            match self.get(id) {
                Some(score) => {
                    outcome.xp_total += score.xp;
                    outcome.scored += 1;
                    for award in &score.traits {
                        *outcome.trait_hp.entry(award.trait_name.clone()).or_insert(0) +=
                            award.hp;
                    }
                }
                None => {
                    log::warn!("No scoring entry for activity id {}, skipping", id);
                    outcome.skipped.push(id);
                }
            }
        }

        outcome
    }
}

impl ActivityOutcome {
    /// Apply the outcome to a learner: grant the XP and feed the trait ledger
    pub fn apply(&self, profile: &mut LearnerProfile, ledger: &mut TraitLedger) -> XpAward {
        for (trait_name, hp) in &self.trait_hp {
            ledger.award(trait_name, *hp);
        }
        profile.grant_xp(self.xp_total)
    }
}

/// Built-in scoring table for the daily activity checklist
pub fn default_scoring_table() -> ScoringTable {
    fn entry(xp: u64, traits: &[(&str, u32)]) -> ActivityScore {
        ActivityScore {
            xp,
            traits: traits
                .iter()
                .map(|&(trait_name, hp)| TraitAward {
                    trait_name: trait_name.to_string(),
                    hp,
                })
                .collect(),
        }
    }

    let entries = BTreeMap::from([
        (1, entry(50, &[("Resilience", 30), ("Discipline", 50)])),
        (2, entry(40, &[("Discipline", 40)])),
        (3, entry(60, &[("Discipline", 35), ("Learning", 50)])),
        (4, entry(45, &[("Discipline", 45)])),
        (5, entry(35, &[("Discipline", 35)])),
        (6, entry(70, &[("Discipline", 50), ("Achievement", 40)])),
        (7, entry(55, &[("Discipline", 45)])),
        (8, entry(30, &[("Discipline", 30)])),
        (9, entry(50, &[("Discipline", 40), ("Ambition", 30)])),
        (10, entry(60, &[("Discipline", 50)])),
        (11, entry(40, &[("Learning", 40)])),
        (12, entry(35, &[("Discipline", 35)])),
        (13, entry(65, &[("Discipline", 50), ("Ambition", 40)])),
        (14, entry(45, &[("Discipline", 40)])),
        (15, entry(50, &[("Discipline", 50)])),
        (16, entry(55, &[("Discipline", 45), ("Ambition", 35)])),
        (17, entry(40, &[("Resilience", 35)])),
        (18, entry(45, &[("Discipline", 45)])),
        (19, entry(70, &[("Discipline", 60), ("Ambition", 50)])),
        (20, entry(50, &[("Discipline", 50)])),
        (21, entry(60, &[("Discipline", 50), ("Learning", 40)])),
        (22, entry(55, &[("Discipline", 45), ("Ambition", 35)])),
        (23, entry(75, &[("Discipline", 60), ("Achievement", 50)])),
    ]);

    ScoringTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let table = default_scoring_table();
        assert_eq!(table.len(), 23);
        assert_eq!(table.get(1).unwrap().xp, 50);
        assert!(table.get(24).is_none());
    }

    #[test]
    fn test_score_accumulates_xp_and_traits() {
        let table = default_scoring_table();
        let outcome = table.score(&[1, 3]);

        assert_eq!(outcome.xp_total, 110);
        assert_eq!(outcome.scored, 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.trait_hp["Discipline"], 85);
        assert_eq!(outcome.trait_hp["Resilience"], 30);
        assert_eq!(outcome.trait_hp["Learning"], 50);
    }

    #[test]
    fn test_score_skips_unknown_ids() {
        let table = default_scoring_table();
        let outcome = table.score(&[2, 999, 5]);

        assert_eq!(outcome.xp_total, 75);
        assert_eq!(outcome.scored, 2);
        assert_eq!(outcome.skipped, vec![999]);
    }

    #[test]
    fn test_score_repeated_ids_count_each_time() {
        let table = default_scoring_table();
        let outcome = table.score(&[2, 2]);
        assert_eq!(outcome.xp_total, 80);
        assert_eq!(outcome.trait_hp["Discipline"], 80);
    }

    #[test]
    fn test_apply_feeds_profile_and_ledger() {
        let table = default_scoring_table();
        let mut profile = crate::profile::LearnerProfile::new();
        let mut ledger = TraitLedger::new();

        let outcome = table.score(&[1, 6, 23]);
        let award = outcome.apply(&mut profile, &mut ledger);

        assert_eq!(profile.experience_points, 195);
        assert_eq!(award.new_level, 2);
        assert!(award.leveled_up);
        assert_eq!(ledger.hp("Discipline"), 160);
        assert_eq!(ledger.hp("Achievement"), 90);
        assert_eq!(ledger.hp("Resilience"), 30);
    }
}
