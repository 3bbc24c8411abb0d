//! Progression systems

pub mod error;
pub mod galaxy;
pub mod xp;

pub use error::ProgressionError;
pub use galaxy::{GalaxyDef, GalaxyInfo, all_galaxies, galaxy_def, galaxy_info, GALAXY_COUNT, LEVELS_PER_GALAXY};
pub use xp::{LevelProgress, checked_xp, level_from_xp, level_progress, total_xp_for_level, xp_for_next_level, MAX_LEVEL};
