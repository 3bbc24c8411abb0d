//! Learner profile state

pub mod learner;

pub use learner::{LearnerProfile, XpAward};
