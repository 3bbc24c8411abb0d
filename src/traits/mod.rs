//! Personality traits and HP

pub mod category;
pub mod hp;

pub use category::TraitCategory;
pub use hp::{TraitHp, TraitLedger, HP_DECAY_PER_DAY, HP_PER_TRAIT_LEVEL, MAX_HP};
