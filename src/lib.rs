//! Geoseed library.
//!
//! Offline batch conversion of tabular geo/environmental datasets
//! (meteorite landings, climate station records, wind observations,
//! vegetation zone polygons) from CSV into SQL `INSERT` seed files.
//!
//! Each dataset family is normalized into a single unified record
//! shape (`dataset_type`, `name`, `lat`, `lon`, `value`, `unit`,
//! `metadata`) and rendered into one seed file per family. Processing
//! is single-threaded and fully in-memory: each family runs to
//! completion before the next, and a family's failure never blocks
//! another's.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod metadata;
pub mod models;
pub mod normalize;
pub mod processor;
pub mod sql;

pub use config::SeederConfig;
pub use error::{Result, SeederError};
pub use models::{
    ClimateVariable, DatasetFamily, FamilyOutcome, OutcomeStatus, RunSummary, UnifiedRecord,
};
pub use processor::DatasetProcessor;
