//! Command-line interface components.

use crate::config::SeederConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoseed")]
#[command(about = "Convert tabular geo/environmental CSV datasets into SQL seed files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the raw dataset CSV files
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Directory to write SQL seed files to
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process all dataset families into unified `datasets` seed files (default)
    Process,
    /// Emit the legacy meteorite-only seed for the `locations` table
    Seed,
    /// Export a cleaned meteorite landings CSV (column pruning,
    /// renames, year coercion) instead of SQL
    Clean,
}

impl Args {
    /// Build the seeder configuration, applying CLI overrides over the
    /// defaults.
    pub fn config(&self) -> SeederConfig {
        let mut config = SeederConfig::default();
        if let Some(input) = &self.input {
            config = config.with_input_dir(input);
        }
        if let Some(output) = &self.output {
            config = config.with_output_dir(output);
        }
        config
    }
}
