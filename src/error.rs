//! Error handling for dataset seeding operations.
//!
//! Missing input files and unparseable optional fields are expected
//! conditions and never surface here; only unrecoverable problems
//! (bad configuration, unreadable CSV, failed writes) do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input directory not found: {}", path.display())]
    InputDirNotFound { path: PathBuf },

    #[error("CSV parsing error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV encoding error: {0}")]
    CsvEncode(#[from] csv::Error),

    #[error("invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SeederError>;
