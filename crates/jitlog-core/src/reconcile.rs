//! Cross-source reconciler — pairs Java and Kotlin results by test type.
//!
//! The two benchmarks name some test types differently ("High-Order Function"
//! vs "Higher-Order Func"). A [`CrossSourceMap`] translates Java labels to
//! Kotlin labels; only types present on both sides are compared, in the
//! map's order.

use crate::config::TranslationPair;
use crate::types::{ColumnRole, ComparisonEntry, TestMap};

/// Ordered Java-label → Kotlin-label translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSourceMap {
    pairs: Vec<(String, String)>,
}

impl CrossSourceMap {
    pub fn new<J, K>(pairs: impl IntoIterator<Item = (J, K)>) -> Self
    where
        J: Into<String>,
        K: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(j, k)| (j.into(), k.into()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(j, k)| (j.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<&[TranslationPair]> for CrossSourceMap {
    fn from(pairs: &[TranslationPair]) -> Self {
        Self::new(pairs.iter().map(|p| (p.java.clone(), p.kotlin.clone())))
    }
}

/// One test type measured by both benchmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossComparison {
    pub java_label: String,
    pub kotlin_label: String,
    /// Java execution time (ms).
    pub reference: f64,
    /// Kotlin inline execution time (ms).
    pub comparison: f64,
    /// Positive when Kotlin is faster.
    pub improvement: f64,
}

/// `(reference − comparison) / reference × 100`. Positive means the
/// comparison value is smaller. `None` for a zero reference.
pub fn improvement_pct(reference: f64, comparison: f64) -> Option<f64> {
    if reference == 0.0 {
        return None;
    }
    Some((reference - comparison) / reference * 100.0)
}

/// Compare Java combined results against the Kotlin summary.
///
/// Returns `None` when no test type is present on both sides.
pub fn reconcile(
    java: &TestMap<ComparisonEntry>,
    kotlin: &TestMap<ComparisonEntry>,
    map: &CrossSourceMap,
) -> Option<Vec<CrossComparison>> {
    let mut common = Vec::new();

    for (java_label, kotlin_label) in map.iter() {
        let (Some(j), Some(k)) = (java.get(java_label), kotlin.get(kotlin_label)) else {
            continue;
        };
        let (Some(reference), Some(comparison)) = (
            j.value(ColumnRole::ExecutionTime),
            k.value(ColumnRole::InlineTime),
        ) else {
            continue;
        };
        let Some(improvement) = improvement_pct(reference, comparison) else {
            tracing::warn!(test_type = java_label, "zero Java execution time, comparison skipped");
            continue;
        };
        common.push(CrossComparison {
            java_label: java_label.to_string(),
            kotlin_label: kotlin_label.to_string(),
            reference,
            comparison,
            improvement,
        });
    }

    if common.is_empty() {
        tracing::info!("no common test types found between Java and Kotlin");
        None
    } else {
        tracing::debug!(count = common.len(), "common test types reconciled");
        Some(common)
    }
}
