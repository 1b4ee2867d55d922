//! jitlog-charts — renders normalised benchmark series to chart files.
//!
//! The analysis layer describes each chart as a [`Chart`] made of stacked
//! [`Panel`]s and hands it to a [`Renderer`]. [`SvgRenderer`] draws with
//! plotters; tests substitute their own renderer.

mod svg;

pub use svg::SvgRenderer;

use std::path::PathBuf;

/// One output file: panels are stacked vertically in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// File name without extension.
    pub file_stem: String,
    pub panels: Vec<Panel>,
}

impl Chart {
    /// True when no panel has anything to draw.
    pub fn is_empty(&self) -> bool {
        self.panels.iter().all(Panel::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Lines(LinePanel),
    Bars(BarPanel),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Lines(p) => &p.title,
            Panel::Bars(p) => &p.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Panel::Lines(p) => p.series.iter().all(|s| s.points.is_empty()),
            Panel::Bars(p) => p.categories.is_empty() || p.series.is_empty(),
        }
    }
}

/// Line plot with one marker-and-line series per label.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<LineSeriesData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesData {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Bar plot over named categories.
///
/// With several series the bars are grouped per category. With `signed`,
/// bars are green when positive and red otherwise, and a zero line is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub signed: bool,
}

/// `values[i]` belongs to `categories[i]` of the enclosing panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Something that turns a [`Chart`] into an artifact.
pub trait Renderer {
    /// Render `chart` and return where it was written.
    fn render(&mut self, chart: &Chart) -> anyhow::Result<PathBuf>;
}
