//! Progression errors
//!
//! Invalid inputs are rejected at the function boundary rather than clamped,
//! so upstream bugs surface where they happen.

use thiserror::Error;

/// Errors produced by the progression functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// A level outside [1, 1000] was passed to a galaxy lookup
    #[error("level {level} is outside the valid range 1-1000")]
    LevelOutOfRange { level: u32 },

    /// A raw experience total from an untyped source was negative
    #[error("experience total cannot be negative (got {amount})")]
    NegativeExperience { amount: i64 },
}
