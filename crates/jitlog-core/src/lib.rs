//! jitlog-core — benchmark log table extraction.
//!
//! This crate turns the ASCII result tables printed by the Java JIT inlining
//! benchmark and the Kotlin inline-function benchmark into typed series, and
//! reconciles the two sources by test type.
//!
//! # Pipeline
//!
//! ```text
//! log text ──► locator ──► coerce ──► extract ──► reconcile
//!   (per section)   (per row)   (per log)   (Java × Kotlin)
//! ```
//!
//! Every stage is synchronous and works on fully materialised strings.
//! Missing sections and malformed rows are logged and skipped; only file and
//! configuration failures are [`AnalysisError`]s.

pub mod coerce;
pub mod config;
pub mod error;
pub mod extract;
pub mod locator;
pub mod reconcile;
pub mod schema;
pub mod types;

pub use error::{AnalysisError, RowError};
pub use extract::{extract_java, extract_kotlin_summary, extract_kotlin_warmup, JavaReport};
pub use reconcile::{reconcile, CrossComparison, CrossSourceMap};
pub use types::{ColumnRole, ComparisonEntry, LogSection, MetricRow, RowKey, TestMap, TestSeries};

/// Read a whole log file into memory.
pub fn read_log(path: &std::path::Path) -> Result<String, AnalysisError> {
    std::fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })
}
