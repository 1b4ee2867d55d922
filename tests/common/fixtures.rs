//! Log text fixtures shaped like real benchmark output.
//!
//! The Java and Kotlin benchmarks label some test types differently
//! ("Nested Call" vs "Nested Inline"); the fixtures keep those differences so
//! reconciliation is exercised for real.

use super::builders::TableBuilder;

pub const JAVA_WARMUP_HEADER: &[&str] =
    &["Warm-up Iterations", "Execution Time (ms)", "Time Per Call (ns)"];
pub const JAVA_COMBINED_HEADER: &[&str] =
    &["Test Type", "Execution Time (ms)", "Time Per Call (ns)"];
pub const KOTLIN_WARMUP_HEADER: &[&str] = &[
    "Warm-up Iterations",
    "Inline Time (ms)",
    "Normal Time (ms)",
    "Difference (%)",
];
pub const KOTLIN_SUMMARY_HEADER: &[&str] = &[
    "Test Type",
    "Inline Time (ms)",
    "Normal Time (ms)",
    "Improvement (%)",
];

/// `(section name, section title)` for every Java warm-up table.
pub const JAVA_WARMUP_TITLES: &[(&str, &str)] = &[
    ("Simple Arithmetic", "Simple Arithmetic Function with Different Warm-up Iterations"),
    ("Higher-Order Function", "Higher-Order Function with Different Warm-up Iterations"),
    ("Recursive Call", "Recursive Call with Different Warm-up Iterations"),
    ("Calls Within Loops", "Calls Within Loops with Different Warm-up Iterations"),
    ("Nested Call", "Nested Call with Different Warm-up Iterations"),
    ("Complex Condition", "Complex Condition with Different Warm-up Iterations"),
    ("Generic Function", "Generic Function with Different Warm-up Iterations"),
];

/// Warm-up counts used by both benchmarks.
pub const WARMUP_STEPS: &[u64] = &[0, 10, 100, 1000, 10000];

/// Java combined results `(label, execution ms, ns per call)`.
pub const JAVA_COMBINED_ROWS: &[(&str, f64, f64)] = &[
    ("Simple Arithmetic", 10.0, 100.0),
    ("High-Order Function", 25.0, 250.0),
    ("Recursive Call", 40.0, 400.0),
    ("Calls Within Loops", 12.5, 125.0),
    ("Nested Call", 8.0, 80.0),
    ("Complex Condition", 16.0, 160.0),
    ("Generic Function", 5.0, 50.0),
];

/// Kotlin summary `(label, inline ms, normal ms, improvement %)`.
pub const KOTLIN_SUMMARY_ROWS: &[(&str, f64, f64, f64)] = &[
    ("Simple Arithmetic", 8.0, 10.0, 20.0),
    ("Higher-Order Func", 20.0, 40.0, 50.0),
    ("Recursive Call", 44.0, 40.0, -10.0),
    ("Calls Within Loops", 10.0, 12.5, 20.0),
    ("Nested Inline", 4.0, 8.0, 50.0),
    ("Complex Condition", 12.0, 16.0, 25.0),
    ("Generic Function", 4.0, 5.0, 20.0),
];

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

/// Java warm-up table; execution time halves at each step from `start_ms`.
pub fn java_warmup_table(title: &str, start_ms: f64) -> String {
    let mut b = TableBuilder::new(title).header(JAVA_WARMUP_HEADER);
    let mut ms = start_ms;
    for &n in WARMUP_STEPS {
        let iterations = group_thousands(n);
        b = b.row(&[&iterations, &fmt2(ms), &fmt2(ms * 10.0)]);
        ms /= 2.0;
    }
    b.build()
}

pub fn java_combined_table(rows: &[(&str, f64, f64)]) -> String {
    rows.iter()
        .fold(
            TableBuilder::new("Combined Test Results").header(JAVA_COMBINED_HEADER),
            |b, (label, ms, ns)| b.row(&[label, &fmt2(*ms), &fmt2(*ns)]),
        )
        .build()
}

pub fn kotlin_summary_table(rows: &[(&str, f64, f64, f64)]) -> String {
    rows.iter()
        .fold(
            TableBuilder::new("Kotlin Inline Function Performance Summary")
                .header(KOTLIN_SUMMARY_HEADER),
            |b, (label, inline, normal, imp)| {
                b.row(&[label, &fmt2(*inline), &fmt2(*normal), &fmt2(*imp)])
            },
        )
        .build()
}

pub fn kotlin_warmup_table() -> String {
    let mut b = TableBuilder::new("Simple Arithmetic Function with Different Warm-up Iterations")
        .header(KOTLIN_WARMUP_HEADER);
    let mut inline = 8.0;
    for &n in WARMUP_STEPS {
        let normal = inline * 1.25;
        b = b.row(&[&group_thousands(n), &fmt2(inline), &fmt2(normal), &fmt2(20.0)]);
        inline /= 2.0;
    }
    b.build()
}

/// One per-test result block, as printed between benchmark runs.
pub fn kotlin_result_block(test_type: &str, inline: f64, normal: f64, diff: f64) -> String {
    let wide = "+----------------------+----------------------+----------------------+";
    let narrow = "+----------------------+----------------------+";
    format!(
        "{narrow}\n\
         | Test Type            | {test_type:<20} |\n\
         {wide}\n\
         | Execution Time (ms)  | Function Type        | Value                |\n\
         {wide}\n\
         | {inline:>20.2} | Inline Function      |                      |\n\
         | {normal:>20.2} | Normal Function      |                      |\n\
         | {diff_pct:>20} | Difference           |                      |\n\
         {wide}\n\n",
        diff_pct = format!("{diff:.2}%"),
    )
}

/// A complete Java log: all seven warm-up tables plus combined results.
pub fn sample_java_log() -> String {
    let mut log = String::from("Java JIT Inlining Benchmark\nJVM: OpenJDK 64-Bit Server VM\n\n");
    for (i, (_, title)) in JAVA_WARMUP_TITLES.iter().enumerate() {
        log.push_str(&java_warmup_table(title, 16.0 * (i + 1) as f64));
    }
    log.push_str(&java_combined_table(JAVA_COMBINED_ROWS));
    log
}

/// A complete Kotlin log: warm-up table, per-test blocks and the summary.
pub fn sample_kotlin_log() -> String {
    let mut log = String::from("Kotlin Inline Function Benchmark\n\n");
    log.push_str(&kotlin_warmup_table());
    for (label, inline, normal, imp) in KOTLIN_SUMMARY_ROWS {
        log.push_str(&kotlin_result_block(label, *inline, *normal, *imp));
    }
    log.push_str(&kotlin_summary_table(KOTLIN_SUMMARY_ROWS));
    log
}

/// A Kotlin log whose run was cut short before the summary table.
pub fn truncated_kotlin_log() -> String {
    let mut log = String::from("Kotlin Inline Function Benchmark\n\n");
    for (label, inline, normal, imp) in &KOTLIN_SUMMARY_ROWS[..3] {
        log.push_str(&kotlin_result_block(label, *inline, *normal, *imp));
    }
    log
}

/// `12345` → `"12,345"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
