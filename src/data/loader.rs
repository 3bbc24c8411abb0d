//! Scoring data loader
//!
//! Loads the activity scoring table from an external data file, with
//! fallback to the built-in defaults. RON is the native format; JSON is
//! accepted for deployments that manage their data as JSON.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::activity::{ScoringTable, default_scoring_table};

/// Default directory searched for data files
pub const DATA_DIR: &str = "assets/data";

/// Errors from explicit data-file operations
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Holds all tunable scoring data
#[derive(Debug, Clone)]
pub struct DataManager {
    pub scoring: ScoringTable,
}

impl DataManager {
    /// Create a new DataManager, loading from the default data directory
    /// or falling back to built-in defaults
    pub fn new() -> Self {
        Self::load_from_dir(Path::new(DATA_DIR))
    }

    /// Load from a specific directory, falling back to defaults per file
    pub fn load_from_dir(dir: &Path) -> Self {
        Self {
            scoring: load_scoring(dir),
        }
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            scoring: default_scoring_table(),
        }
    }
}

/// Load the scoring table from `scoring.ron` or `scoring.json`
fn load_scoring(dir: &Path) -> ScoringTable {
    let ron_path = dir.join("scoring.ron");
    if ron_path.exists() {
        match read_scoring(&ron_path) {
            Ok(table) => return table,
            Err(e) => log::warn!("{}; using default scoring table", e),
        }
    }

    let json_path = dir.join("scoring.json");
    if json_path.exists() {
        match read_scoring(&json_path) {
            Ok(table) => return table,
            Err(e) => log::warn!("{}; using default scoring table", e),
        }
    }

    default_scoring_table()
}

/// Read and parse a single scoring file, dispatching on its extension
pub fn read_scoring(path: &Path) -> Result<ScoringTable, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        serde_json::from_str(&content).map_err(|e| DataError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    } else {
        ron::from_str(&content).map_err(|e| DataError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Export the default scoring table as RON for easy editing
pub fn export_default_data(dir: &Path) -> Result<(), DataError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| DataError::Io {
            path: dir.display().to_string(),
            source,
        })?;
    }

    let path = dir.join("scoring.ron");
    let scoring = default_scoring_table();
    let ron = ron::ser::to_string_pretty(&scoring, ron::ser::PrettyConfig::default()).map_err(
        |e| DataError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    )?;
    fs::write(&path, ron).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    log::info!("Default scoring data exported to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("galaxia-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_missing_dir_falls_back_to_defaults() {
        let _ = env_logger::builder().is_test(true).try_init();

        let manager = DataManager::load_from_dir(&test_dir("missing"));
        assert_eq!(manager.scoring, default_scoring_table());
    }

    #[test]
    fn test_export_then_load_ron() {
        let dir = test_dir("export");
        export_default_data(&dir).expect("export failed");
        assert!(dir.join("scoring.ron").exists());

        let manager = DataManager::load_from_dir(&dir);
        assert_eq!(manager.scoring.len(), 23);
        assert_eq!(manager.scoring, default_scoring_table());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_json_table() {
        let dir = test_dir("json");
        fs::create_dir_all(&dir).unwrap();
        let json = serde_json::to_string(&default_scoring_table()).unwrap();
        fs::write(dir.join("scoring.json"), json).unwrap();

        let manager = DataManager::load_from_dir(&dir);
        assert_eq!(manager.scoring, default_scoring_table());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = test_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("scoring.ron"), "not valid ron {{{{").unwrap();

        let manager = DataManager::load_from_dir(&dir);
        assert_eq!(manager.scoring, default_scoring_table());

        let _ = fs::remove_dir_all(&dir);
    }
}
