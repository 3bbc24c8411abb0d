//! Activity scoring and rewards

pub mod rewards;
pub mod scoring;

pub use rewards::RewardKind;
pub use scoring::{
    ActivityOutcome, ActivityScore, ScoringTable, TraitAward, default_scoring_table,
};
