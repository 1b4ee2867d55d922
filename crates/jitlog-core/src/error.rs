//! Error types for jitlog-core.
//!
//! Only I/O and configuration failures surface as [`AnalysisError`]. Row
//! problems are [`RowError`]s, which extractors log and skip.

use crate::types::ColumnRole;
use std::path::PathBuf;
use thiserror::Error;

/// Failure that aborts one analysis step.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A log file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be built or deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

/// Why a single table row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected at least {expected} delimited fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// The iteration key is not digit-like; usually a header remnant.
    #[error("key field {value:?} is not a number")]
    KeyNotNumeric { value: String },

    #[error("test type label is empty")]
    EmptyLabel,

    #[error("{role} field {value:?} is not a number")]
    NotNumeric { role: ColumnRole, value: String },
}
