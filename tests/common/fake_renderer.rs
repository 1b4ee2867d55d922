//! RecordingRenderer — a [`Renderer`] that keeps charts in memory.
//!
//! Lets harnesses assert on exactly what would have been drawn without
//! touching plotters or the filesystem.

use jitlog_charts::{Chart, Renderer};
use std::path::PathBuf;

#[derive(Default)]
pub struct RecordingRenderer {
    /// Every chart handed to `render`, in call order.
    pub charts: Vec<Chart>,
    /// File stems whose rendering should fail.
    pub fail_on: Vec<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(stem: impl Into<String>) -> Self {
        Self {
            charts: Vec::new(),
            fail_on: vec![stem.into()],
        }
    }

    pub fn chart(&self, stem: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.file_stem == stem)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, chart: &Chart) -> anyhow::Result<PathBuf> {
        self.charts.push(chart.clone());
        if self.fail_on.contains(&chart.file_stem) {
            anyhow::bail!("simulated failure for {}", chart.file_stem);
        }
        Ok(PathBuf::from(format!("{}.svg", chart.file_stem)))
    }
}
