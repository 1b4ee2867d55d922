//! Domain-specific assertion macros for jitlog harnesses.
//!
//! These add context to failure messages so it is clear which test type or
//! artifact broke, not just which number differed.

// ---------------------------------------------------------------------------
// Numeric assertions
// ---------------------------------------------------------------------------

/// Assert two floats are equal within a tolerance (default `1e-9`).
///
/// ```rust
/// assert_close!(comparison.improvement, 20.0);
/// assert_close!(value, 33.33, 0.01);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr) => {
        $crate::assert_close!($actual, $expected, 1e-9)
    };
    ($actual:expr, $expected:expr, $tol:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        if (actual - expected).abs() > $tol {
            panic!(
                "assert_close! failed:\n  expression: {}\n  expected: {}\n  actual:   {}\n  tolerance: {}",
                stringify!($actual),
                expected,
                actual,
                $tol
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Extraction assertions
// ---------------------------------------------------------------------------

/// Assert a warm-up map holds `name` with exactly `len` points.
#[macro_export]
macro_rules! assert_series_len {
    ($map:expr, $name:expr, $len:expr) => {{
        let name: &str = $name;
        match $map.get(name) {
            Some(series) => assert_eq!(
                series.len(),
                $len,
                "assert_series_len! failed for {:?}: iterations = {:?}",
                name,
                series.iterations
            ),
            None => panic!(
                "assert_series_len! failed: {:?} not extracted.\n  Available: {:?}",
                name,
                $map.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Report assertions
// ---------------------------------------------------------------------------

/// Assert an artifact was produced.
#[macro_export]
macro_rules! assert_produced {
    ($report:expr, $kind:expr) => {{
        match $report.artifact($kind).map(|a| &a.status) {
            Some(jitlog::ArtifactStatus::Produced(_)) => {}
            other => panic!(
                "assert_produced! failed for {:?}: status = {:?}\n{}",
                $kind, other, $report
            ),
        }
    }};
}

/// Assert an artifact was skipped, optionally for a specific reason.
#[macro_export]
macro_rules! assert_skipped {
    ($report:expr, $kind:expr) => {{
        match $report.artifact($kind).map(|a| &a.status) {
            Some(jitlog::ArtifactStatus::Skipped(_)) => {}
            other => panic!(
                "assert_skipped! failed for {:?}: status = {:?}\n{}",
                $kind, other, $report
            ),
        }
    }};
    ($report:expr, $kind:expr, $reason:expr) => {{
        match $report.artifact($kind).map(|a| &a.status) {
            Some(jitlog::ArtifactStatus::Skipped(reason)) if reason == $reason => {}
            other => panic!(
                "assert_skipped! failed for {:?}: expected reason {:?}, status = {:?}\n{}",
                $kind, $reason, other, $report
            ),
        }
    }};
}
