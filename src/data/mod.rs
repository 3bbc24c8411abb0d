//! Data loading and external scoring content
//!
//! This module handles loading scoring data from external files,
//! allowing deployments to tune the tables without rebuilding.

pub mod loader;

pub use loader::{DataError, DataManager, export_default_data, read_scoring};
