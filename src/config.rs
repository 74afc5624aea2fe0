//! Seeder configuration.
//!
//! Replaces hardcoded module-level paths with an explicit structure
//! handed to the orchestrator at construction time: input directory,
//! output directory, target tables, and per-family file patterns.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Directory searched for raw dataset CSV files
    pub input_dir: PathBuf,

    /// Directory SQL seed files are written to (created if absent)
    pub output_dir: PathBuf,

    /// Target table for unified multi-family inserts
    pub unified_table: String,

    /// Target table for the legacy meteorite-only seed
    pub legacy_table: String,

    /// Glob pattern for the meteorite landings file
    pub meteorite_pattern: String,

    /// Glob patterns for the climate files, one per expected variable
    pub climate_patterns: Vec<String>,

    /// Glob pattern for the wind observations file
    pub wind_pattern: String,

    /// Glob pattern for the vegetation zones export
    pub vegetation_pattern: String,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(constants::DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            unified_table: constants::UNIFIED_TABLE.to_string(),
            legacy_table: constants::LEGACY_TABLE.to_string(),
            meteorite_pattern: constants::METEORITE_FILE_PATTERN.to_string(),
            climate_patterns: constants::CLIMATE_FILE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            wind_pattern: constants::WIND_FILE_PATTERN.to_string(),
            vegetation_pattern: constants::VEGETATION_FILE_PATTERN.to_string(),
        }
    }
}

impl SeederConfig {
    /// Configuration with a custom input directory
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Configuration with a custom unified target table
    pub fn with_unified_table(mut self, table: impl Into<String>) -> Self {
        self.unified_table = table.into();
        self
    }
}
