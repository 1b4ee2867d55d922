//! End-to-end run: read both logs, extract, reconcile, render.

use std::path::Path;

use jitlog_charts::{Chart, Renderer};
use jitlog_core::config::{Config, OutputConfig};
use jitlog_core::{
    extract_java, extract_kotlin_summary, extract_kotlin_warmup, read_log, reconcile,
    ComparisonEntry, CrossComparison, CrossSourceMap, JavaReport, TestMap, TestSeries,
};

use crate::charts;
use crate::report::{Artifact, ArtifactKind, ArtifactStatus, Report};

/// Everything extracted from the two logs.
///
/// `java` and `kotlin_summary` are `None` only when the corresponding log
/// could not be read; a readable log with no tables yields empty values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub java: Option<JavaReport>,
    pub kotlin_warmup: Option<TestSeries>,
    pub kotlin_summary: Option<TestMap<ComparisonEntry>>,
    /// Test types present on both sides, in translation-table order.
    pub cross: Option<Vec<CrossComparison>>,
}

/// Extract and reconcile already-loaded log text.
pub fn analyze_texts(java: Option<&str>, kotlin: Option<&str>, map: &CrossSourceMap) -> Analysis {
    let java = java.map(extract_java);
    if let Some(report) = &java {
        tracing::info!(
            warmup_types = report.warmup.len(),
            combined_types = report.combined.as_ref().map_or(0, TestMap::len),
            "Java log extracted"
        );
    }

    let (kotlin_warmup, kotlin_summary) = match kotlin {
        Some(text) => (extract_kotlin_warmup(text), Some(extract_kotlin_summary(text))),
        None => (None, None),
    };
    if let Some(summary) = &kotlin_summary {
        tracing::info!(
            warmup_points = kotlin_warmup.as_ref().map_or(0, TestSeries::len),
            summary_types = summary.len(),
            "Kotlin log extracted"
        );
    }

    let cross = match (java.as_ref().and_then(|j| j.combined.as_ref()), &kotlin_summary) {
        (Some(combined), Some(summary)) if !summary.is_empty() => reconcile(combined, summary, map),
        _ => None,
    };

    Analysis {
        java,
        kotlin_warmup,
        kotlin_summary,
        cross,
    }
}

/// Read both logs, analyse them and render every chart that has data.
///
/// Never fails as a whole: an unreadable log is logged and its artifacts are
/// reported as skipped.
pub fn run(
    java_log: &Path,
    kotlin_log: &Path,
    config: &Config,
    renderer: &mut dyn Renderer,
) -> Report {
    let java = load("java", java_log);
    let kotlin = load("kotlin", kotlin_log);

    let analysis = analyze_texts(java.as_deref(), kotlin.as_deref(), &config.cross_source_map());
    render_all(&analysis, &config.output, renderer)
}

fn load(source: &str, path: &Path) -> Option<String> {
    match read_log(path) {
        Ok(text) => {
            tracing::debug!(source, path = %path.display(), bytes = text.len(), "log loaded");
            Some(text)
        }
        Err(err) => {
            tracing::error!(source, error = %err, "log unavailable");
            None
        }
    }
}

/// Plan and render the three charts, recording one [`Artifact`] each.
pub fn render_all(analysis: &Analysis, output: &OutputConfig, renderer: &mut dyn Renderer) -> Report {
    let planned = [
        (ArtifactKind::WarmupChart, plan_warmup(analysis, &output.warmup_chart)),
        (ArtifactKind::CrossLanguageChart, plan_cross(analysis, &output.comparison_chart)),
        (ArtifactKind::InlineChart, plan_inline(analysis, &output.inline_chart)),
    ];

    let mut artifacts = Vec::with_capacity(planned.len());
    for (kind, plan) in planned {
        let status = produce(kind, plan, &mut *renderer);
        artifacts.push(Artifact { kind, status });
    }

    Report::new(analysis, artifacts)
}

fn produce(
    kind: ArtifactKind,
    plan: Result<Chart, &'static str>,
    renderer: &mut dyn Renderer,
) -> ArtifactStatus {
    let chart = match plan {
        Ok(chart) => chart,
        Err(reason) => {
            tracing::info!(artifact = %kind, reason, "chart skipped");
            return ArtifactStatus::Skipped(reason.to_string());
        }
    };

    match renderer.render(&chart) {
        Ok(path) => ArtifactStatus::Produced(path),
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(artifact = %kind, error = %message, "chart rendering failed");
            ArtifactStatus::Failed(message)
        }
    }
}

// ---------------------------------------------------------------------------
// Planning: each returns the chart or the reason it was skipped
// ---------------------------------------------------------------------------

fn plan_warmup(analysis: &Analysis, stem: &str) -> Result<Chart, &'static str> {
    let java = analysis.java.as_ref().ok_or("Java log unavailable")?;
    charts::warmup_chart(java, stem).ok_or("no Java warm-up data")
}

fn plan_cross(analysis: &Analysis, stem: &str) -> Result<Chart, &'static str> {
    let java = analysis.java.as_ref().ok_or("Java log unavailable")?;
    java.combined.as_ref().ok_or("no combined Java results")?;
    let kotlin = analysis.kotlin_summary.as_ref().ok_or("Kotlin log unavailable")?;
    if kotlin.is_empty() {
        return Err("no Kotlin results");
    }
    let common = analysis.cross.as_deref().ok_or("no common test types")?;
    charts::cross_language_chart(common, stem).ok_or("no common test types")
}

fn plan_inline(analysis: &Analysis, stem: &str) -> Result<Chart, &'static str> {
    let kotlin = analysis.kotlin_summary.as_ref().ok_or("Kotlin log unavailable")?;
    charts::inline_chart(kotlin, stem).ok_or("no Kotlin results")
}
