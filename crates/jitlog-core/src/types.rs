//! Core types for jitlog-core.
//!
//! This module defines the normalised shapes every extractor produces: the
//! per-row [`MetricRow`], the per-test-type [`TestSeries`] and
//! [`ComparisonEntry`], and the insertion-ordered [`TestMap`] that keys them.

use crate::reconcile::improvement_pct;

/// Semantic role of one column in a benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    /// Warm-up iteration count (row key of warm-up tables).
    Iterations,
    /// Test-type label (row key of summary tables).
    TestType,
    ExecutionTime,
    TimePerCall,
    InlineTime,
    NormalTime,
    DiffPercent,
    Improvement,
}

impl ColumnRole {
    /// Whether this role identifies the row rather than measuring something.
    pub fn is_key(self) -> bool {
        matches!(self, ColumnRole::Iterations | ColumnRole::TestType)
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Iterations => write!(f, "warm-up iterations"),
            ColumnRole::TestType => write!(f, "test type"),
            ColumnRole::ExecutionTime => write!(f, "execution time"),
            ColumnRole::TimePerCall => write!(f, "time per call"),
            ColumnRole::InlineTime => write!(f, "inline time"),
            ColumnRole::NormalTime => write!(f, "normal time"),
            ColumnRole::DiffPercent => write!(f, "difference"),
            ColumnRole::Improvement => write!(f, "improvement"),
        }
    }
}

/// Primary key of a parsed row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKey {
    Iterations(u64),
    Label(String),
}

/// A named section located in raw log text: its title and the data rows
/// beneath the column header, in log order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSection {
    pub title: String,
    pub rows: Vec<String>,
}

/// One successfully coerced table row.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub key: RowKey,
    /// Measurements in column order, tagged by role.
    pub values: Vec<(ColumnRole, f64)>,
}

impl MetricRow {
    pub fn value(&self, role: ColumnRole) -> Option<f64> {
        self.values
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, v)| *v)
    }
}

// ---------------------------------------------------------------------------
// TestSeries
// ---------------------------------------------------------------------------

/// Warm-up rows for one test type as parallel arrays.
///
/// `iterations[i]` pairs with the `i`-th value of every entry in `series`.
/// Order is log row order, which the benchmarks emit with monotonically
/// increasing warm-up counts.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSeries {
    pub test_type: String,
    pub iterations: Vec<u64>,
    pub series: Vec<(ColumnRole, Vec<f64>)>,
}

impl TestSeries {
    /// Empty series with one y-array per measurement role.
    pub fn new(test_type: impl Into<String>, roles: impl IntoIterator<Item = ColumnRole>) -> Self {
        Self {
            test_type: test_type.into(),
            iterations: Vec::new(),
            series: roles.into_iter().map(|r| (r, Vec::new())).collect(),
        }
    }

    /// Append a row. Rows keyed by label, or missing one of this series'
    /// roles, are rejected so the arrays stay parallel.
    pub fn push(&mut self, row: &MetricRow) -> bool {
        let RowKey::Iterations(n) = row.key else {
            return false;
        };
        let Some(values) = self
            .series
            .iter()
            .map(|(role, _)| row.value(*role))
            .collect::<Option<Vec<f64>>>()
        else {
            return false;
        };
        self.iterations.push(n);
        for ((_, ys), v) in self.series.iter_mut().zip(values) {
            ys.push(v);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn values(&self, role: ColumnRole) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, ys)| ys.as_slice())
    }

    /// `(iterations, value)` points for one role, ready for a line chart.
    pub fn points(&self, role: ColumnRole) -> Vec<(f64, f64)> {
        self.values(role)
            .map(|ys| {
                self.iterations
                    .iter()
                    .zip(ys)
                    .map(|(&x, &y)| (x as f64, y))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Improvement of the last row over the first for `role`, in percent.
    /// `None` with fewer than two rows or a zero first value.
    pub fn warmup_improvement(&self, role: ColumnRole) -> Option<f64> {
        let ys = self.values(role)?;
        if ys.len() < 2 {
            return None;
        }
        improvement_pct(ys[0], ys[ys.len() - 1])
    }
}

// ---------------------------------------------------------------------------
// ComparisonEntry
// ---------------------------------------------------------------------------

/// Paired measurements for one test type from a summary table.
///
/// `improvement` is fixed at construction from the row's improvement or
/// difference column; entries are never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub test_type: String,
    pub values: Vec<(ColumnRole, f64)>,
    pub improvement: Option<f64>,
}

impl ComparisonEntry {
    pub fn new(test_type: impl Into<String>, values: Vec<(ColumnRole, f64)>) -> Self {
        let improvement = values
            .iter()
            .find(|(r, _)| matches!(r, ColumnRole::Improvement | ColumnRole::DiffPercent))
            .map(|(_, v)| *v);
        Self {
            test_type: test_type.into(),
            values,
            improvement,
        }
    }

    /// Build from a label-keyed row; iteration-keyed rows yield `None`.
    pub fn from_row(row: MetricRow) -> Option<Self> {
        match row.key {
            RowKey::Label(label) => Some(Self::new(label, row.values)),
            RowKey::Iterations(_) => None,
        }
    }

    pub fn value(&self, role: ColumnRole) -> Option<f64> {
        self.values
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, v)| *v)
    }
}

// ---------------------------------------------------------------------------
// TestMap
// ---------------------------------------------------------------------------

/// Map from test-type name to `T` that remembers first-insertion order.
///
/// Inserting an existing key replaces the value in place, so a duplicated
/// row overrides the earlier one without moving it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for TestMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> TestMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> IntoIterator for TestMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for TestMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = TestMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
