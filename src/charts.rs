//! Chart planning — turns extracted data into [`Chart`] descriptions.
//!
//! Builders return `None` when there is nothing to draw, so the renderer is
//! never handed an empty chart.

use jitlog_charts::{BarPanel, BarSeries, Chart, LinePanel, LineSeriesData, Panel};
use jitlog_core::{ColumnRole, ComparisonEntry, CrossComparison, JavaReport, TestMap};

/// Java execution time per warm-up count, plus first-to-last improvement.
pub fn warmup_chart(java: &JavaReport, file_stem: &str) -> Option<Chart> {
    if java.warmup.is_empty() {
        return None;
    }

    let lines = LinePanel {
        title: "Java Performance with Different Warm-up Iterations".into(),
        x_desc: "Number of Warm-up Iterations".into(),
        y_desc: "Execution Time (ms)".into(),
        series: java
            .warmup
            .values()
            .map(|s| LineSeriesData {
                label: s.test_type.clone(),
                points: s.points(ColumnRole::ExecutionTime),
            })
            .collect(),
    };

    let (categories, improvements): (Vec<String>, Vec<f64>) = java
        .warmup
        .values()
        .filter_map(|s| {
            s.warmup_improvement(ColumnRole::ExecutionTime)
                .map(|imp| (s.test_type.clone(), imp))
        })
        .unzip();

    let bars = BarPanel {
        title: "Performance Improvement from No Warm-up to Max Warm-up (%)".into(),
        x_desc: "Test Type".into(),
        y_desc: "Improvement (%)".into(),
        categories,
        series: vec![BarSeries {
            label: "Improvement".into(),
            values: improvements,
        }],
        signed: true,
    };

    non_empty(Chart {
        file_stem: file_stem.to_string(),
        panels: vec![Panel::Lines(lines), Panel::Bars(bars)],
    })
}

/// Java vs Kotlin inline execution time for the reconciled test types.
pub fn cross_language_chart(common: &[CrossComparison], file_stem: &str) -> Option<Chart> {
    let categories: Vec<String> = common.iter().map(|c| c.java_label.clone()).collect();

    let times = BarPanel {
        title: "Java vs Kotlin Inline Execution Time of Different Test Types".into(),
        x_desc: "Test Type".into(),
        y_desc: "Execution Time (ms)".into(),
        categories: categories.clone(),
        series: vec![
            BarSeries {
                label: "Java".into(),
                values: common.iter().map(|c| c.reference).collect(),
            },
            BarSeries {
                label: "Kotlin Inline".into(),
                values: common.iter().map(|c| c.comparison).collect(),
            },
        ],
        signed: false,
    };

    let improvement = BarPanel {
        title: "Kotlin Inline Performance Improvement over Java (%)".into(),
        x_desc: "Test Type".into(),
        y_desc: "Improvement (%)".into(),
        categories,
        series: vec![BarSeries {
            label: "Improvement".into(),
            values: common.iter().map(|c| c.improvement).collect(),
        }],
        signed: true,
    };

    non_empty(Chart {
        file_stem: file_stem.to_string(),
        panels: vec![Panel::Bars(times), Panel::Bars(improvement)],
    })
}

/// Kotlin inline vs normal function time, plus the logged improvement.
pub fn inline_chart(kotlin: &TestMap<ComparisonEntry>, file_stem: &str) -> Option<Chart> {
    let rows: Vec<(&str, f64, f64, Option<f64>)> = kotlin
        .iter()
        .filter_map(|(name, e)| {
            Some((
                name,
                e.value(ColumnRole::InlineTime)?,
                e.value(ColumnRole::NormalTime)?,
                e.improvement,
            ))
        })
        .collect();

    let times = BarPanel {
        title: "Kotlin Inline vs Normal Function Execution Time".into(),
        x_desc: "Test Type".into(),
        y_desc: "Execution Time (ms)".into(),
        categories: rows.iter().map(|r| r.0.to_string()).collect(),
        series: vec![
            BarSeries {
                label: "Inline Function".into(),
                values: rows.iter().map(|r| r.1).collect(),
            },
            BarSeries {
                label: "Normal Function".into(),
                values: rows.iter().map(|r| r.2).collect(),
            },
        ],
        signed: false,
    };

    let (categories, improvements): (Vec<String>, Vec<f64>) = rows
        .iter()
        .filter_map(|r| r.3.map(|imp| (r.0.to_string(), imp)))
        .unzip();

    let improvement = BarPanel {
        title: "Performance Improvement of Inline over Normal Function (%)".into(),
        x_desc: "Test Type".into(),
        y_desc: "Improvement (%)".into(),
        categories,
        series: vec![BarSeries {
            label: "Improvement".into(),
            values: improvements,
        }],
        signed: true,
    };

    non_empty(Chart {
        file_stem: file_stem.to_string(),
        panels: vec![Panel::Bars(times), Panel::Bars(improvement)],
    })
}

fn non_empty(chart: Chart) -> Option<Chart> {
    (!chart.is_empty()).then_some(chart)
}
