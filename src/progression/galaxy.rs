//! Galaxy coordinates
//!
//! The 1000 levels are grouped into 10 galaxies of 100 levels each, used
//! for thematic progression framing.

use serde::{Deserialize, Serialize};

use super::error::ProgressionError;
use super::xp::MAX_LEVEL;

/// Number of galaxies spanning the level range
pub const GALAXY_COUNT: u32 = 10;

/// Levels per galaxy
pub const LEVELS_PER_GALAXY: u32 = 100;

/// A level's position in the galaxy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxyInfo {
    /// Galaxy number, 1-10
    pub galaxy: u32,
    /// Level within the galaxy, 1-100
    pub level_in_galaxy: u32,
}

impl GalaxyInfo {
    /// Map back to the absolute level
    pub fn level(&self) -> u32 {
        (self.galaxy - 1) * LEVELS_PER_GALAXY + self.level_in_galaxy
    }
}

/// Compute galaxy coordinates for a level
///
/// Levels outside [1, 1000] are a caller contract violation and are
/// rejected rather than clamped; `level_from_xp` never produces one.
pub fn galaxy_info(level: u32) -> Result<GalaxyInfo, ProgressionError> {
    if level == 0 || level > MAX_LEVEL {
        return Err(ProgressionError::LevelOutOfRange { level });
    }
    Ok(GalaxyInfo {
        galaxy: (level - 1) / LEVELS_PER_GALAXY + 1,
        level_in_galaxy: (level - 1) % LEVELS_PER_GALAXY + 1,
    })
}

// =============================================================================
// Galaxy Catalog
// =============================================================================

/// Static definition of a galaxy
#[derive(Debug, Clone)]
pub struct GalaxyDef {
    pub galaxy: u32,
    pub name: &'static str,
    /// Accent color as a hex string
    pub color: &'static str,
    pub min_level: u32,
    pub max_level: u32,
    pub description: &'static str,
}

const GALAXY_DEFS: [GalaxyDef; 10] = [
    GalaxyDef {
        galaxy: 1,
        name: "Morning Star",
        color: "#10b981",
        min_level: 1,
        max_level: 100,
        description: "Where the cosmic journey begins",
    },
    GalaxyDef {
        galaxy: 2,
        name: "Andromeda",
        color: "#06b6d4",
        min_level: 101,
        max_level: 200,
        description: "First exploration beyond the home system",
    },
    GalaxyDef {
        galaxy: 3,
        name: "Milky Way",
        color: "#f59e0b",
        min_level: 201,
        max_level: 300,
        description: "Into the heart of the galaxy",
    },
    GalaxyDef {
        galaxy: 4,
        name: "Sombrero",
        color: "#ec4899",
        min_level: 301,
        max_level: 400,
        description: "A shrouded, mysterious spiral",
    },
    GalaxyDef {
        galaxy: 5,
        name: "Cygnus Spiral",
        color: "#8b5cf6",
        min_level: 401,
        max_level: 500,
        description: "The cosmic dance",
    },
    GalaxyDef {
        galaxy: 6,
        name: "Crab Nebula",
        color: "#ef4444",
        min_level: 501,
        max_level: 600,
        description: "Raw stellar energy",
    },
    GalaxyDef {
        galaxy: 7,
        name: "Orion Reach",
        color: "#3b82f6",
        min_level: 601,
        max_level: 700,
        description: "Advanced territory",
    },
    GalaxyDef {
        galaxy: 8,
        name: "Cosmic Treasure",
        color: "#14b8a6",
        min_level: 701,
        max_level: 800,
        description: "Riches of the deep sky",
    },
    GalaxyDef {
        galaxy: 9,
        name: "Stellar Paradise",
        color: "#f97316",
        min_level: 801,
        max_level: 900,
        description: "The approach to apotheosis",
    },
    GalaxyDef {
        galaxy: 10,
        name: "Supreme Universe",
        color: "#6366f1",
        min_level: 901,
        max_level: 1000,
        description: "Master of the universe",
    },
];

/// All galaxy definitions, in order
pub fn all_galaxies() -> &'static [GalaxyDef] {
    &GALAXY_DEFS
}

/// Find a galaxy definition by galaxy number
pub fn galaxy_def(galaxy: u32) -> Option<&'static GalaxyDef> {
    GALAXY_DEFS.iter().find(|g| g.galaxy == galaxy)
}
