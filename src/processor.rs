//! Dataset processing orchestration.
//!
//! Runs the four dataset families in fixed order: resolve the family's
//! input file(s) under the configured input directory, normalize every
//! row, and write one SQL seed file per family (climate: per variable)
//! under the output directory. A missing input file or an empty result
//! set is a warning, not a failure; a read or write failure is fatal
//! for that family's output only and never blocks the others.

use crate::config::SeederConfig;
use crate::constants;
use crate::error::{Result, SeederError};
use crate::export;
use crate::models::{
    ClimateVariable, DatasetFamily, FamilyOutcome, OutcomeStatus, RunSummary, UnifiedRecord,
};
use crate::normalize::{self, ColumnIndex, RawRow};
use crate::sql;

use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Orchestrates one seeding run over all dataset families
pub struct DatasetProcessor {
    config: SeederConfig,
}

impl DatasetProcessor {
    /// Create a processor. The input directory must exist; individual
    /// input files may be absent and are skipped at run time.
    pub fn new(config: SeederConfig) -> Result<Self> {
        if !config.input_dir.is_dir() {
            return Err(SeederError::InputDirNotFound {
                path: config.input_dir,
            });
        }
        Ok(Self { config })
    }

    /// Process every family into unified seed files, in the fixed
    /// `DatasetFamily::ALL` order. Terminal state is "all families
    /// attempted": per-family failures are reported in the summary,
    /// not propagated.
    pub fn process_all(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for family in DatasetFamily::ALL {
            match family {
                DatasetFamily::Meteorite => summary.outcomes.push(self.process_meteorites()),
                DatasetFamily::Climate => summary.outcomes.extend(self.process_climate()),
                DatasetFamily::Wind => summary.outcomes.push(self.process_wind()),
                DatasetFamily::Vegetation => summary.outcomes.push(self.process_vegetation()),
            }
        }
        summary
    }

    /// Legacy meteorite-only seed for the wide `locations` table,
    /// emitted as a single multi-row statement.
    pub fn seed_legacy(&self) -> RunSummary {
        let label = "meteorite (legacy seed)";
        let outcome = match self.resolve_single(&self.config.meteorite_pattern) {
            Ok(Some(input)) => self.run_legacy_seed(label, &input),
            Ok(None) => self.missing_input(label, &self.config.meteorite_pattern),
            Err(error) => failed(label, &self.config.meteorite_pattern, &error),
        };
        RunSummary {
            outcomes: vec![outcome],
        }
    }

    /// Cleaned-CSV export of the meteorite landings file: select and
    /// reorder the load table's nine columns (dropping the export's
    /// `Unnamed` and `GeoLocation` columns, renaming `mass (g)` to
    /// `mass`), integer-coerce the year, and write missing values as
    /// the `NULL` marker. No rows are dropped.
    pub fn clean_meteorites(&self) -> RunSummary {
        let label = "meteorite (cleaned csv)";
        let outcome = match self.resolve_single(&self.config.meteorite_pattern) {
            Ok(Some(input)) => self.run_cleaned_export(label, &input),
            Ok(None) => self.missing_input(label, &self.config.meteorite_pattern),
            Err(error) => failed(label, &self.config.meteorite_pattern, &error),
        };
        RunSummary {
            outcomes: vec![outcome],
        }
    }

    fn run_cleaned_export(&self, label: &str, input: &Path) -> FamilyOutcome {
        let result = self.read_table(input).and_then(|(columns, rows)| {
            if rows.is_empty() {
                warn!("{}: no rows to clean", label);
                return Ok(OutcomeStatus::Empty);
            }
            let cleaned: Vec<_> = rows
                .iter()
                .map(|record| normalize::meteorite::cleaned_row(&RawRow::new(&columns, record)))
                .collect();
            let document = export::render_cleaned_meteorites(&cleaned)?;
            self.write_output(constants::CLEANED_OUTPUT_FILENAME, &document)
                .map(|path| OutcomeStatus::Written {
                    path,
                    records: cleaned.len(),
                })
        });

        match result {
            Ok(status) => FamilyOutcome {
                label: label.to_string(),
                input: input.display().to_string(),
                status,
            },
            Err(error) => failed(label, &input.display().to_string(), &error),
        }
    }

    fn process_meteorites(&self) -> FamilyOutcome {
        self.run_single_file_family(
            "meteorite",
            &self.config.meteorite_pattern,
            constants::METEORITE_OUTPUT_FILENAME,
            |row| normalize::meteorite::normalize(row),
        )
    }

    fn process_wind(&self) -> FamilyOutcome {
        self.run_single_file_family(
            "wind",
            &self.config.wind_pattern,
            constants::WIND_OUTPUT_FILENAME,
            |row| normalize::wind::normalize(row),
        )
    }

    fn process_vegetation(&self) -> FamilyOutcome {
        self.run_single_file_family(
            "vegetation",
            &self.config.vegetation_pattern,
            constants::VEGETATION_OUTPUT_FILENAME,
            |row| Some(normalize::vegetation::normalize(row)),
        )
    }

    /// Climate has one candidate file per variable; each resolves and
    /// processes independently with its own output file.
    fn process_climate(&self) -> Vec<FamilyOutcome> {
        let mut outcomes = Vec::new();
        for pattern in &self.config.climate_patterns {
            let resolved = match self.resolve_single(pattern) {
                Ok(resolved) => resolved,
                Err(error) => {
                    outcomes.push(failed("climate", pattern, &error));
                    continue;
                }
            };
            let Some(input) = resolved else {
                outcomes.push(self.missing_input("climate", pattern));
                continue;
            };

            let variable = ClimateVariable::from_file_name(&file_name(&input));
            let label = format!("climate/{}", variable.label());
            let output_name = constants::climate_output_filename(variable.label());
            let outcome = self.run_file(&label, &input, &output_name, |row| {
                normalize::climate::normalize(row, variable)
            });
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Resolve, normalize, and emit one single-file family.
    fn run_single_file_family(
        &self,
        label: &str,
        pattern: &str,
        output_name: &str,
        normalize_row: impl Fn(&RawRow) -> Option<UnifiedRecord>,
    ) -> FamilyOutcome {
        match self.resolve_single(pattern) {
            Ok(Some(input)) => self.run_file(label, &input, output_name, normalize_row),
            Ok(None) => self.missing_input(label, pattern),
            Err(error) => failed(label, pattern, &error),
        }
    }

    /// Normalize one resolved input file and write its seed file.
    fn run_file(
        &self,
        label: &str,
        input: &Path,
        output_name: &str,
        normalize_row: impl Fn(&RawRow) -> Option<UnifiedRecord>,
    ) -> FamilyOutcome {
        let result = self.read_table(input).and_then(|(columns, rows)| {
            let total = rows.len();
            let records: Vec<UnifiedRecord> = rows
                .iter()
                .map(|record| RawRow::new(&columns, record))
                .filter_map(|row| normalize_row(&row))
                .collect();
            debug!(
                "{}: {} of {} rows survived normalization",
                label,
                records.len(),
                total
            );
            match sql::render_unified(&self.config.unified_table, &records) {
                Some(seed) => self
                    .write_output(output_name, &seed)
                    .map(|path| OutcomeStatus::Written {
                        path,
                        records: records.len(),
                    }),
                None => {
                    warn!("{}: no records survived, skipping {}", label, output_name);
                    Ok(OutcomeStatus::Empty)
                }
            }
        });

        match result {
            Ok(status) => FamilyOutcome {
                label: label.to_string(),
                input: input.display().to_string(),
                status,
            },
            Err(error) => failed(label, &input.display().to_string(), &error),
        }
    }

    fn run_legacy_seed(&self, label: &str, input: &Path) -> FamilyOutcome {
        let result = self.read_table(input).and_then(|(columns, rows)| {
            let seed_rows: Vec<_> = rows
                .iter()
                .map(|record| RawRow::new(&columns, record))
                .filter_map(|row| normalize::meteorite::legacy_row(&row))
                .collect();
            match sql::render_legacy_seed(&self.config.legacy_table, &seed_rows) {
                Some(seed) => self
                    .write_output(constants::LEGACY_SEED_OUTPUT_FILENAME, &seed)
                    .map(|path| OutcomeStatus::Written {
                        path,
                        records: seed_rows.len(),
                    }),
                None => {
                    warn!("{}: no records survived, skipping seed", label);
                    Ok(OutcomeStatus::Empty)
                }
            }
        });

        match result {
            Ok(status) => FamilyOutcome {
                label: label.to_string(),
                input: input.display().to_string(),
                status,
            },
            Err(error) => failed(label, &input.display().to_string(), &error),
        }
    }

    /// Resolve a file pattern under the input directory to at most one
    /// path. Extra matches are logged and ignored (first match in name
    /// order wins, for deterministic output).
    fn resolve_single(&self, pattern: &str) -> Result<Option<PathBuf>> {
        let full_pattern = self.config.input_dir.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();
        let paths = glob::glob(&full_pattern).map_err(|source| SeederError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut matches: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(error) => {
                    warn!("skipping unreadable match for '{}': {}", pattern, error);
                    None
                }
            })
            .collect();
        matches.sort();

        if matches.len() > 1 {
            debug!(
                "pattern '{}' matched {} files, using {}",
                pattern,
                matches.len(),
                matches[0].display()
            );
        }
        Ok(matches.into_iter().next())
    }

    /// Read a whole CSV file into memory before transformation begins.
    /// Structurally malformed data rows are logged and skipped.
    fn read_table(&self, path: &Path) -> Result<(ColumnIndex, Vec<StringRecord>)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| SeederError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| SeederError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        let columns = ColumnIndex::from_headers(&headers);

        let mut rows = Vec::new();
        for record in reader.records() {
            match record {
                Ok(record) => rows.push(record),
                Err(error) => {
                    warn!("{}: skipping malformed row: {}", path.display(), error);
                }
            }
        }
        Ok((columns, rows))
    }

    /// Write one output file under the output directory, creating the
    /// directory on first use.
    fn write_output(&self, file_name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.output_dir.join(file_name);
        fs::write(&path, contents).map_err(|source| SeederError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
        Ok(path)
    }

    fn missing_input(&self, label: &str, pattern: &str) -> FamilyOutcome {
        warn!(
            "skipping {}: no file matching '{}' under {}",
            label,
            pattern,
            self.config.input_dir.display()
        );
        FamilyOutcome {
            label: label.to_string(),
            input: pattern.to_string(),
            status: OutcomeStatus::MissingInput,
        }
    }
}

fn failed(label: &str, input: &str, error: &SeederError) -> FamilyOutcome {
    warn!("{} failed: {}", label, error);
    FamilyOutcome {
        label: label.to_string(),
        input: input.to_string(),
        status: OutcomeStatus::Failed {
            reason: error.to_string(),
        },
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
