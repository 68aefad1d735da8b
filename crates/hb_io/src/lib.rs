//! hb_io — roster file I/O.
//!
//! Reads a CSV roster (header row + data rows), validates the required
//! columns, projects rows into core records, and writes the balanced roster
//! back out. No balancing logic lives here; the balancer never sees a file.

#![forbid(unsafe_code)]

use std::io;

use thiserror::Error;

pub mod roster;

pub use roster::{sorted_output_path, Roster};

/// Unified error for roster I/O and input validation.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem read failures.
    #[error("read {path}: {source}")]
    Read { path: String, source: io::Error },

    /// Filesystem write failures.
    #[error("write {path}: {source}")]
    Write { path: String, source: io::Error },

    /// Malformed CSV (ragged rows, bad quoting, non-UTF-8).
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row. Raised before the
    /// balancer is invoked.
    #[error("required column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    /// Generic shape violations (e.g. row/record count mismatch).
    #[error("invalid roster: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;
