//! Core data structures for dataset seeding.
//!
//! Defines the dataset families, climate sub-type classification, the
//! unified record every family is normalized into, and the per-family
//! outcome reporting used by the orchestrator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Dataset families supported by the seeder, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFamily {
    Meteorite,
    Climate,
    Wind,
    Vegetation,
}

impl DatasetFamily {
    /// All families in the fixed processing order
    pub const ALL: &[DatasetFamily] = &[
        DatasetFamily::Meteorite,
        DatasetFamily::Climate,
        DatasetFamily::Wind,
        DatasetFamily::Vegetation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFamily::Meteorite => "meteorite",
            DatasetFamily::Climate => "climate",
            DatasetFamily::Wind => "wind",
            DatasetFamily::Vegetation => "vegetation",
        }
    }
}

impl fmt::Display for DatasetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Climate sub-types, classified from the source filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateVariable {
    AvgTemperature,
    MaxTemperature,
    MinTemperature,
    Humidity,
    Evaporation,
    Generic,
}

impl ClimateVariable {
    /// Classify a climate file by substring match on its name.
    ///
    /// `tasmax`/`tasmin` must be checked before bare `tas`, since both
    /// contain it as a prefix.
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.contains("tasmax") {
            ClimateVariable::MaxTemperature
        } else if file_name.contains("tasmin") {
            ClimateVariable::MinTemperature
        } else if file_name.contains("tas") {
            ClimateVariable::AvgTemperature
        } else if file_name.contains("hurs") {
            ClimateVariable::Humidity
        } else if file_name.contains("pan-evap") {
            ClimateVariable::Evaporation
        } else {
            ClimateVariable::Generic
        }
    }

    /// Label used in record names, metadata, and output filenames
    pub fn label(&self) -> &'static str {
        match self {
            ClimateVariable::AvgTemperature => "avg_temperature",
            ClimateVariable::MaxTemperature => "max_temperature",
            ClimateVariable::MinTemperature => "min_temperature",
            ClimateVariable::Humidity => "humidity",
            ClimateVariable::Evaporation => "evaporation",
            ClimateVariable::Generic => "climate",
        }
    }

    /// Measurement unit of the variable's Annual aggregate
    pub fn unit(&self) -> &'static str {
        match self {
            ClimateVariable::AvgTemperature
            | ClimateVariable::MaxTemperature
            | ClimateVariable::MinTemperature => "°C",
            ClimateVariable::Humidity => "%",
            ClimateVariable::Evaporation => "mm",
            ClimateVariable::Generic => "unknown",
        }
    }
}

/// The normalized shape every dataset family is converted into before
/// SQL emission. Constructed once per surviving source row and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedRecord {
    pub dataset_type: DatasetFamily,
    /// Human-readable label; never empty (falls back to "Unknown")
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Primary numeric measurement (mass, annual aggregate, wind speed,
    /// polygon area); 0 when absent from the source row
    pub value: f64,
    pub unit: String,
    /// Family-specific side fields, JSON-encoded
    pub metadata: String,
}

/// One row of the legacy meteorite-only seed, targeting the wide
/// `locations` table rather than the unified schema
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyMeteoriteRow {
    pub id: i64,
    pub name: String,
    pub nametype: String,
    pub recclass: String,
    pub mass: f64,
    pub fall: String,
    pub year: i64,
    pub lat: f64,
    pub lon: f64,
}

/// One row of the cleaned meteorite CSV export. All fields are carried
/// as text: raw values pass through verbatim, missing or blank fields
/// become the literal `NULL` marker, and the year is integer-coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedMeteoriteRow {
    pub id: String,
    pub name: String,
    pub nametype: String,
    pub recclass: String,
    pub mass: String,
    pub fall: String,
    pub year: String,
    pub reclat: String,
    pub reclong: String,
}

/// Result of attempting one output file
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeStatus {
    /// Seed file written with the given surviving record count
    Written { path: PathBuf, records: usize },
    /// Input file absent; family skipped
    MissingInput,
    /// Input present but no rows survived normalization; nothing written
    Empty,
    /// Reading the input or writing the seed file failed; other
    /// families are unaffected
    Failed { reason: String },
}

/// Per-family (or per-climate-sub-type) processing outcome
#[derive(Debug, Clone)]
pub struct FamilyOutcome {
    /// "meteorite", "climate/max_temperature", ...
    pub label: String,
    /// Input path (or pattern, when nothing matched)
    pub input: String,
    pub status: OutcomeStatus,
}

/// Aggregated outcome of a full run; every family is attempted, so one
/// family's failure is never represented here as another's.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FamilyOutcome>,
}

impl RunSummary {
    pub fn files_written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Written { .. }))
            .count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Failed { .. }))
            .count()
    }

    pub fn records_written(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                OutcomeStatus::Written { records, .. } => records,
                _ => 0,
            })
            .sum()
    }
}
