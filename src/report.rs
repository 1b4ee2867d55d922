//! Completion summary printed at the end of a run.

use std::fmt;
use std::path::PathBuf;

use jitlog_core::TestMap;

use crate::analysis::Analysis;

/// The three charts a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    WarmupChart,
    CrossLanguageChart,
    InlineChart,
}

impl ArtifactKind {
    pub fn description(self) -> &'static str {
        match self {
            ArtifactKind::WarmupChart => "Java performance with different warm-up iterations",
            ArtifactKind::CrossLanguageChart => "Java vs Kotlin inline execution time",
            ArtifactKind::InlineChart => "Kotlin inline vs normal function performance",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::WarmupChart => "warmup",
            ArtifactKind::CrossLanguageChart => "cross-language",
            ArtifactKind::InlineChart => "inline",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Produced(PathBuf),
    /// Nothing to draw; holds the reason.
    Skipped(String),
    /// The renderer returned an error.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub status: ArtifactStatus,
}

/// Extraction counts plus one [`Artifact`] per chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub java_warmup_types: usize,
    pub java_combined_types: usize,
    pub kotlin_warmup_points: usize,
    pub kotlin_summary_types: usize,
    pub common_types: usize,
    pub artifacts: Vec<Artifact>,
}

impl Report {
    pub fn new(analysis: &Analysis, artifacts: Vec<Artifact>) -> Self {
        let java = analysis.java.as_ref();
        Self {
            java_warmup_types: java.map_or(0, |j| j.warmup.len()),
            java_combined_types: java
                .and_then(|j| j.combined.as_ref())
                .map_or(0, TestMap::len),
            kotlin_warmup_points: analysis.kotlin_warmup.as_ref().map_or(0, |s| s.len()),
            kotlin_summary_types: analysis.kotlin_summary.as_ref().map_or(0, TestMap::len),
            common_types: analysis.cross.as_ref().map_or(0, Vec::len),
            artifacts,
        }
    }

    pub fn artifact(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Paths of every chart that was written.
    pub fn produced(&self) -> impl Iterator<Item = &PathBuf> {
        self.artifacts.iter().filter_map(|a| match &a.status {
            ArtifactStatus::Produced(path) => Some(path),
            _ => None,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Analysis Complete =====")?;
        writeln!(
            f,
            "Extracted: {} Java warm-up series, {} Java combined results, \
             {} Kotlin warm-up points, {} Kotlin results, {} common test types",
            self.java_warmup_types,
            self.java_combined_types,
            self.kotlin_warmup_points,
            self.kotlin_summary_types,
            self.common_types,
        )?;
        writeln!(f, "Analysis results:")?;
        for artifact in &self.artifacts {
            let what = artifact.kind.description();
            match &artifact.status {
                ArtifactStatus::Produced(path) => writeln!(f, "- {what}: {}", path.display())?,
                ArtifactStatus::Skipped(reason) => writeln!(f, "- {what}: skipped ({reason})")?,
                ArtifactStatus::Failed(err) => writeln!(f, "- {what}: failed ({err})")?,
            }
        }
        Ok(())
    }
}
