//! Trait HP accumulation
//!
//! Each personality trait carries an HP counter that grows as activities
//! feed it and drains slowly on inactive days. Trait levels derive from HP.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HP needed per trait level
pub const HP_PER_TRAIT_LEVEL: u32 = 10;

/// HP lost per day without activity
pub const HP_DECAY_PER_DAY: u32 = 1;

/// Advisory display ceiling for a trait gauge; accumulation does not clamp
pub const MAX_HP: u32 = 100;

/// HP counter for a single trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitHp {
    pub hp: u32,
}

impl TraitHp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add HP from an activity award
    pub fn award(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount);
    }

    /// Apply inactivity decay for a number of days, flooring at 0
    pub fn decay(&mut self, days: u32) {
        self.hp = self.hp.saturating_sub(days.saturating_mul(HP_DECAY_PER_DAY));
    }

    /// Trait level derived from HP
    pub fn trait_level(&self) -> u32 {
        self.hp / HP_PER_TRAIT_LEVEL
    }
}

/// Per-learner map of trait name to HP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitLedger {
    traits: BTreeMap<String, TraitHp>,
}

impl TraitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award HP to a trait, creating it at 0 HP if unseen
    pub fn award(&mut self, trait_name: &str, amount: u32) {
        self.traits
            .entry(trait_name.to_string())
            .or_default()
            .award(amount);
    }

    /// Current HP of a trait (0 if unseen)
    pub fn hp(&self, trait_name: &str) -> u32 {
        self.traits.get(trait_name).map_or(0, |t| t.hp)
    }

    /// Trait level of a trait (0 if unseen)
    pub fn trait_level(&self, trait_name: &str) -> u32 {
        self.traits.get(trait_name).map_or(0, |t| t.trait_level())
    }

    /// Apply inactivity decay to every tracked trait
    pub fn decay_all(&mut self, days: u32) {
        for trait_hp in self.traits.values_mut() {
            trait_hp.decay(days);
        }
    }

    /// Sum of HP across all traits
    pub fn total_hp(&self) -> u64 {
        self.traits.values().map(|t| t.hp as u64).sum()
    }

    /// The trait with the most HP, if any
    pub fn strongest(&self) -> Option<(&str, TraitHp)> {
        self.traits
            .iter()
            .max_by_key(|(_, t)| t.hp)
            .map(|(name, t)| (name.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TraitHp)> {
        self.traits.iter().map(|(name, t)| (name.as_str(), *t))
    }
}
