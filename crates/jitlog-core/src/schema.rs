//! Declarative description of every benchmark table jitlog understands.
//!
//! A [`TableLayout`] lists the columns of one table shape and the role each
//! plays; a [`SectionSpec`] binds a test-type name to the `=== Title ===`
//! header that introduces its table. The extractors iterate these tables
//! instead of carrying one hand-written pattern per section.

use crate::types::ColumnRole;

/// One table column: the label printed in the header row and its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub role: ColumnRole,
}

/// Shape of one table. The first column is always the row key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub columns: &'static [Column],
    /// When set, the header row must carry exactly these labels. Otherwise
    /// any `|`-delimited header with the right column count is accepted.
    pub strict_labels: bool,
}

impl TableLayout {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn key_role(&self) -> ColumnRole {
        self.columns[0].role
    }

    /// Roles of the measurement columns, in column order.
    pub fn measurement_roles(&self) -> impl Iterator<Item = ColumnRole> + '_ {
        self.columns.iter().skip(1).map(|c| c.role)
    }
}

/// A named section: which test type it holds, its header title and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub layout: &'static TableLayout,
}

const fn col(label: &'static str, role: ColumnRole) -> Column {
    Column { label, role }
}

// ---------------------------------------------------------------------------
// Java JIT benchmark
// ---------------------------------------------------------------------------

pub const JAVA_WARMUP_LAYOUT: TableLayout = TableLayout {
    columns: &[
        col("Warm-up Iterations", ColumnRole::Iterations),
        col("Execution Time (ms)", ColumnRole::ExecutionTime),
        col("Time Per Call (ns)", ColumnRole::TimePerCall),
    ],
    strict_labels: false,
};

pub const JAVA_COMBINED_LAYOUT: TableLayout = TableLayout {
    columns: &[
        col("Test Type", ColumnRole::TestType),
        col("Execution Time (ms)", ColumnRole::ExecutionTime),
        col("Time Per Call (ns)", ColumnRole::TimePerCall),
    ],
    strict_labels: false,
};

pub const JAVA_WARMUP_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: "Simple Arithmetic",
        title: "Simple Arithmetic Function with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Higher-Order Function",
        title: "Higher-Order Function with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Recursive Call",
        title: "Recursive Call with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Calls Within Loops",
        title: "Calls Within Loops with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Nested Call",
        title: "Nested Call with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Complex Condition",
        title: "Complex Condition with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
    SectionSpec {
        name: "Generic Function",
        title: "Generic Function with Different Warm-up Iterations",
        layout: &JAVA_WARMUP_LAYOUT,
    },
];

pub const JAVA_COMBINED_SECTION: SectionSpec = SectionSpec {
    name: "combined",
    title: "Combined Test Results",
    layout: &JAVA_COMBINED_LAYOUT,
};

// ---------------------------------------------------------------------------
// Kotlin inline benchmark
// ---------------------------------------------------------------------------

pub const KOTLIN_WARMUP_LAYOUT: TableLayout = TableLayout {
    columns: &[
        col("Warm-up Iterations", ColumnRole::Iterations),
        col("Inline Time (ms)", ColumnRole::InlineTime),
        col("Normal Time (ms)", ColumnRole::NormalTime),
        col("Difference (%)", ColumnRole::DiffPercent),
    ],
    strict_labels: true,
};

pub const KOTLIN_SUMMARY_LAYOUT: TableLayout = TableLayout {
    columns: &[
        col("Test Type", ColumnRole::TestType),
        col("Inline Time (ms)", ColumnRole::InlineTime),
        col("Normal Time (ms)", ColumnRole::NormalTime),
        col("Improvement (%)", ColumnRole::Improvement),
    ],
    strict_labels: true,
};

pub const KOTLIN_WARMUP_SECTIONS: &[SectionSpec] = &[SectionSpec {
    name: "Simple Arithmetic",
    title: "Simple Arithmetic Function with Different Warm-up Iterations",
    layout: &KOTLIN_WARMUP_LAYOUT,
}];

pub const KOTLIN_SUMMARY_SECTION: SectionSpec = SectionSpec {
    name: "summary",
    title: "Kotlin Inline Function Performance Summary",
    layout: &KOTLIN_SUMMARY_LAYOUT,
};
