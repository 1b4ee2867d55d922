//! Table locator — finds a `=== Title ===` section and returns its data rows.
//!
//! A benchmark table looks like:
//!
//! ```text
//! === Simple Arithmetic Function with Different Warm-up Iterations ===
//! +----------------------+----------------------+----------------------+
//! | Warm-up Iterations   | Execution Time (ms)  | Time Per Call (ns)   |
//! +----------------------+----------------------+----------------------+
//! |                    0 |               123.45 |                 1.23 |
//! +----------------------+----------------------+----------------------+
//! ```
//!
//! The pattern is built from a [`TableLayout`]: a border is `+` followed by
//! one dash run per column (any length), and the header row has one cell per
//! column. Anything except another `===` title may sit between the title and
//! the first border. The first matching occurrence wins; a missing title or
//! malformed border is simply no match, even when a well-formed table follows
//! under a later title.

use crate::schema::TableLayout;
use crate::types::LogSection;
use regex::Regex;

/// Compiled matcher for one section title and table shape.
#[derive(Debug, Clone)]
pub struct TableLocator {
    title: String,
    pattern: Regex,
}

impl TableLocator {
    pub fn new(title: &str, layout: &TableLayout) -> Self {
        let border = border_pattern(layout.width());
        let pattern = format!(
            r"=== {title} ==={gap}*?{border}\r?\n{header}\r?\n{border}\r?\n({gap}*?){border}",
            title = regex::escape(title),
            header = header_pattern(layout),
            gap = SAME_SECTION,
        );
        let pattern = Regex::new(&pattern).expect("table pattern is built from escaped literals");
        Self {
            title: title.to_string(),
            pattern,
        }
    }

    /// Locate the section in `text`. Blank lines inside the row block are
    /// dropped; every other line is returned verbatim in log order.
    pub fn locate(&self, text: &str) -> Option<LogSection> {
        let block = self.pattern.captures(text)?.get(1)?.as_str();
        let rows = block
            .trim()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();
        Some(LogSection {
            title: self.title.clone(),
            rows,
        })
    }
}

/// One-shot convenience over [`TableLocator`].
pub fn locate(text: &str, title: &str, layout: &TableLayout) -> Option<LogSection> {
    TableLocator::new(title, layout).locate(text)
}

/// One character that does not start a `===` run, so a match never crosses
/// into the next titled section.
const SAME_SECTION: &str = "(?:[^=]|=[^=]|==[^=])";

/// `+---+---+` with `columns` dash runs of any length.
fn border_pattern(columns: usize) -> String {
    format!(r"\+{}", r"-+\+".repeat(columns))
}

fn header_pattern(layout: &TableLayout) -> String {
    if layout.strict_labels {
        let cells: String = layout
            .columns
            .iter()
            .map(|c| format!(r"\|\s*{}\s+", regex::escape(c.label)))
            .collect();
        format!(r"{cells}\|")
    } else {
        format!(r"{}\|", r"\|[^|\n]+".repeat(layout.width()))
    }
}
