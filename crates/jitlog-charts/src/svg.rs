use crate::{BarPanel, Chart, LinePanel, Panel, Renderer};
use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;

// Font sizes
const TITLE_FONT_SIZE: u32 = 24;
const AXIS_LABEL_FONT_SIZE: u32 = 18;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const LEGEND_FONT_SIZE: u32 = 14;

/// Series colours, cycled by series index.
const PALETTE: &[RGBColor] = &[
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(148, 103, 189), // purple
    RGBColor(140, 86, 75),   // brown
    RGBColor(227, 119, 194), // pink
    RGBColor(127, 127, 127), // grey
    RGBColor(188, 189, 34),  // olive
    RGBColor(23, 190, 207),  // cyan
];

const POSITIVE: RGBColor = RGBColor(44, 160, 44);
const NEGATIVE: RGBColor = RGBColor(214, 39, 40);

fn series_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

/// Writes each [`Chart`] as `<out_dir>/<file_stem>.svg`.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    out_dir: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(out_dir: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self {
            out_dir: out_dir.into(),
            size,
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, chart: &Chart) -> Result<PathBuf> {
        let path = self.out_dir.join(format!("{}.svg", chart.file_stem));
        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            root.fill(&WHITE)?;

            let panels: Vec<&Panel> = chart.panels.iter().filter(|p| !p.is_empty()).collect();
            if !panels.is_empty() {
                let areas = root.split_evenly((panels.len(), 1));
                for (area, panel) in areas.iter().zip(panels) {
                    let drawn = match panel {
                        Panel::Lines(p) => draw_lines(area, p),
                        Panel::Bars(p) => draw_bars(area, p),
                    };
                    drawn.with_context(|| format!("failed to draw panel '{}'", panel.title()))?;
                }
            }

            root.present()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        tracing::debug!(path = %path.display(), panels = chart.panels.len(), "chart rendered");
        println!("Chart saved as '{}'", path.display());
        Ok(path)
    }
}

fn draw_lines(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &LinePanel) -> Result<()> {
    let points = || panel.series.iter().flat_map(|s| s.points.iter().copied());
    let (x_min, x_max) = x_range(points().map(|(x, _)| x));
    let (y_min, y_max) = value_range(points().map(|(_, y)| y));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc.as_str())
        .y_desc(panel.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for (idx, series) in panel.series.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(PointSeries::of_element(
            series.points.iter().copied(),
            4,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    Ok(())
}

fn draw_bars(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &BarPanel) -> Result<()> {
    let num_categories = panel.categories.len();
    let num_series = panel.series.len();
    let (y_min, y_max) = value_range(panel.series.iter().flat_map(|s| s.values.iter().copied()));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(num_categories as f64 - 0.5), y_min..y_max)?;

    let categories = &panel.categories;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_categories)
        .x_label_formatter(&|x| category_label(categories, *x))
        .x_desc(panel.x_desc.as_str())
        .y_desc(panel.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    // Grouped bars: each category gets 0.8 of a unit, split between series.
    let bar_width = 0.8 / num_series as f64;
    for (series_idx, series) in panel.series.iter().enumerate() {
        let base = series_color(series_idx);
        let offset = (series_idx as f64 - (num_series as f64 - 1.0) / 2.0) * bar_width;

        let bars = series.values.iter().enumerate().map(|(i, &v)| {
            let center = i as f64 + offset;
            let color = match (panel.signed, v > 0.0) {
                (true, true) => POSITIVE,
                (true, false) => NEGATIVE,
                (false, _) => base,
            };
            let (top, bottom) = if v >= 0.0 { (v, 0.0) } else { (0.0, v) };
            Rectangle::new(
                [
                    (center - bar_width / 2.0 + 0.02, top),
                    (center + bar_width / 2.0 - 0.02, bottom),
                ],
                color.filled(),
            )
        });

        let anno = chart.draw_series(bars)?;
        if !panel.signed {
            anno.label(series.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], base.filled())
            });
        }
    }

    if panel.signed {
        chart.draw_series(LineSeries::new(
            vec![(-0.5, 0.0), (num_categories as f64 - 0.5, 0.0)],
            BLACK.mix(0.3).stroke_width(1),
        ))?;
    } else {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE))
            .draw()?;
    }

    Ok(())
}

/// Category name for a tick sitting on an integer position, blank otherwise.
fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() >= 0.3 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Value axis range that always includes zero, padded by 10%.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = max - min;
    if span == 0.0 {
        return (min - 1.0, max + 1.0);
    }
    let pad = span * 0.1;
    (if min < 0.0 { min - pad } else { min }, max + pad)
}

/// Data-driven x range, padded by 5% (or ±1 for a single x value).
fn x_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span == 0.0 {
        return (min - 1.0, max + 1.0);
    }
    (min - span * 0.05, max + span * 0.05)
}
