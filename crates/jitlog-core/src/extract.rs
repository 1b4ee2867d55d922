//! Section extractors — locate-then-coerce over the [`schema`](crate::schema)
//! tables for each log shape.
//!
//! Missing sections are never errors: they are absent from the result and
//! reported at `info` level. Callers treat absence as "no data".

use crate::coerce::{coerce_rows, parse_number};
use crate::locator::TableLocator;
use crate::schema::{
    SectionSpec, JAVA_COMBINED_SECTION, JAVA_WARMUP_SECTIONS, KOTLIN_SUMMARY_SECTION,
    KOTLIN_WARMUP_SECTIONS,
};
use crate::types::{ColumnRole, ComparisonEntry, TestMap, TestSeries};
use regex::Regex;
use std::sync::LazyLock;

/// Everything extracted from a Java benchmark log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JavaReport {
    /// Warm-up series per test type, in schema order.
    pub warmup: TestMap<TestSeries>,
    /// The "Combined Test Results" table; `None` when the section is absent.
    pub combined: Option<TestMap<ComparisonEntry>>,
}

impl JavaReport {
    pub fn is_empty(&self) -> bool {
        self.warmup.is_empty() && self.combined.is_none()
    }
}

/// Extract every warm-up section in `specs`. Sections that are missing or
/// have no valid rows are left out.
pub fn extract_sections(text: &str, specs: &[SectionSpec]) -> TestMap<TestSeries> {
    let mut out = TestMap::new();
    for spec in specs {
        let Some(section) = TableLocator::new(spec.title, spec.layout).locate(text) else {
            tracing::info!(test_type = spec.name, "section not found: {}", spec.title);
            continue;
        };

        let mut series = TestSeries::new(spec.name, spec.layout.measurement_roles());
        for row in coerce_rows(&section, spec.layout) {
            series.push(&row);
        }
        tracing::debug!(
            test_type = spec.name,
            rows = section.rows.len(),
            parsed = series.len(),
            "warm-up section extracted"
        );

        if series.is_empty() {
            tracing::info!(test_type = spec.name, "section has no usable rows");
        } else {
            out.insert(spec.name, series);
        }
    }
    out
}

/// Extract a label-keyed summary table. `None` only when the section itself
/// is missing; a located table with no valid rows yields an empty map.
pub fn extract_table(text: &str, spec: &SectionSpec) -> Option<TestMap<ComparisonEntry>> {
    let section = TableLocator::new(spec.title, spec.layout).locate(text)?;
    let map: TestMap<ComparisonEntry> = coerce_rows(&section, spec.layout)
        .into_iter()
        .filter_map(ComparisonEntry::from_row)
        .map(|e| (e.test_type.clone(), e))
        .collect();
    tracing::debug!(section = spec.title, rows = section.rows.len(), parsed = map.len(), "table extracted");
    Some(map)
}

/// Java log: seven warm-up sections plus the combined results table.
pub fn extract_java(text: &str) -> JavaReport {
    let warmup = extract_sections(text, JAVA_WARMUP_SECTIONS);
    let combined = extract_table(text, &JAVA_COMBINED_SECTION);
    if combined.is_none() {
        tracing::info!("section not found: {}", JAVA_COMBINED_SECTION.title);
    }
    JavaReport { warmup, combined }
}

/// Kotlin log: the four-column Simple Arithmetic warm-up table.
pub fn extract_kotlin_warmup(text: &str) -> Option<TestSeries> {
    extract_sections(text, KOTLIN_WARMUP_SECTIONS)
        .into_iter()
        .next()
        .map(|(_, series)| series)
}

// ---------------------------------------------------------------------------
// Kotlin summary strategies
// ---------------------------------------------------------------------------

/// Ways of reading the Kotlin per-test-type results, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStrategy {
    /// The "Kotlin Inline Function Performance Summary" table.
    SummaryTable,
    /// Individual per-test result blocks scattered through the log.
    IndividualBlocks,
}

pub const KOTLIN_SUMMARY_STRATEGIES: &[SummaryStrategy] =
    &[SummaryStrategy::SummaryTable, SummaryStrategy::IndividualBlocks];

impl SummaryStrategy {
    pub fn name(self) -> &'static str {
        match self {
            SummaryStrategy::SummaryTable => "summary table",
            SummaryStrategy::IndividualBlocks => "individual result blocks",
        }
    }

    /// `None` means this strategy found nothing to work with and the next
    /// one should be tried.
    pub fn extract(self, text: &str) -> Option<TestMap<ComparisonEntry>> {
        match self {
            SummaryStrategy::SummaryTable => extract_table(text, &KOTLIN_SUMMARY_SECTION),
            SummaryStrategy::IndividualBlocks => extract_individual_blocks(text),
        }
    }
}

/// Kotlin log: per-test-type inline/normal comparison. The first strategy
/// that finds its structure wins; an empty map means no data.
pub fn extract_kotlin_summary(text: &str) -> TestMap<ComparisonEntry> {
    for strategy in KOTLIN_SUMMARY_STRATEGIES {
        if let Some(map) = strategy.extract(text) {
            tracing::debug!(strategy = strategy.name(), entries = map.len(), "Kotlin results extracted");
            return map;
        }
        tracing::info!(strategy = strategy.name(), "no Kotlin results found with this strategy");
    }
    TestMap::new()
}

static INDIVIDUAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    let border = r"\+(?:-+\+)+";
    Regex::new(&format!(
        concat!(
            r"\|\s*Test Type\s+\|\s*([^|\n]+?)\s*\|\r?\n",
            r"{b}\r?\n",
            r"\|\s*Execution Time \(ms\)\s+\|\s*Function Type\s+\|\s*Value\s+\|\r?\n",
            r"{b}\r?\n",
            r"\|\s*([0-9,.]+)\s+\|\s*Inline Function\s+\|[^|\n]*\|\r?\n",
            r"\|\s*([0-9,.]+)\s+\|\s*Normal Function\s+\|[^|\n]*\|\r?\n",
            r"\|\s*([0-9,.\-]+)%\s+\|\s*Difference\s+\|[^|\n]*\|",
        ),
        b = border
    ))
    .expect("individual block pattern is a fixed literal")
});

/// `None` when no block matches at all.
fn extract_individual_blocks(text: &str) -> Option<TestMap<ComparisonEntry>> {
    let mut map = TestMap::new();
    let mut matched = false;

    for caps in INDIVIDUAL_BLOCK.captures_iter(text) {
        matched = true;
        let test_type = caps[1].trim();
        let parsed = (
            parse_number(&caps[2]),
            parse_number(&caps[3]),
            parse_number(&caps[4]),
        );
        let (Some(inline), Some(normal), Some(improvement)) = parsed else {
            tracing::warn!(test_type, "error parsing individual result block, skipped");
            continue;
        };
        map.insert(
            test_type,
            ComparisonEntry::new(
                test_type,
                vec![
                    (ColumnRole::InlineTime, inline),
                    (ColumnRole::NormalTime, normal),
                    (ColumnRole::Improvement, improvement),
                ],
            ),
        );
    }

    matched.then_some(map)
}
