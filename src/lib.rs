//! jitlog — Java JIT vs Kotlin inline benchmark log analysis.
//!
//! Reads a Java benchmark log and a Kotlin benchmark log, extracts their
//! result tables with [`jitlog_core`], and renders up to three charts with a
//! [`jitlog_charts::Renderer`].
//!
//! # Architecture
//!
//! ```text
//! read ──► extract ──► reconcile ──► plan charts ──► render ──► Report
//! ```
//!
//! Each source is read and parsed on its own, so an unreadable Kotlin log
//! still yields the Java warm-up chart. Every artifact is reported
//! individually as produced, skipped or failed.

pub mod analysis;
pub mod charts;
pub mod report;

pub use analysis::{analyze_texts, render_all, run, Analysis};
pub use report::{Artifact, ArtifactKind, ArtifactStatus, Report};
