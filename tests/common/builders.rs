//! Test builders — ASCII tables in the shape the benchmarks print.
//!
//! These builders are designed for readability in test setup, not for
//! production use.

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

enum Line {
    Cells(Vec<String>),
    Raw(String),
}

/// Fluent builder for a titled benchmark table.
///
/// # Example
///
/// ```rust
/// let text = TableBuilder::new("Combined Test Results")
///     .header(&["Test Type", "Execution Time (ms)", "Time Per Call (ns)"])
///     .row(&["Recursive Call", "12.50", "125.00"])
///     .build();
/// ```
pub struct TableBuilder {
    title: String,
    header: Vec<String>,
    lines: Vec<Line>,
    preamble: Vec<String>,
}

impl TableBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            header: Vec::new(),
            lines: Vec::new(),
            preamble: Vec::new(),
        }
    }

    pub fn header(mut self, labels: &[&str]) -> Self {
        self.header = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.lines
            .push(Line::Cells(cells.iter().map(|s| s.to_string()).collect()));
        self
    }

    /// Insert a body line verbatim (for malformed rows).
    pub fn raw_row(mut self, line: impl Into<String>) -> Self {
        self.lines.push(Line::Raw(line.into()));
        self
    }

    /// Free text between the title and the table, like a progress message.
    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    fn cell_width(&self) -> usize {
        let cells = self.lines.iter().flat_map(|l| match l {
            Line::Cells(c) => c.iter().map(String::len).collect::<Vec<_>>(),
            Line::Raw(_) => Vec::new(),
        });
        self.header
            .iter()
            .map(String::len)
            .chain(cells)
            .max()
            .unwrap_or(0)
            .max(20)
    }

    pub fn build(&self) -> String {
        let width = self.cell_width();
        let border = format!(
            "+{}\n",
            vec!["-".repeat(width + 2); self.header.len()].join("+") + "+"
        );
        let render = |cells: &[String], right: bool| {
            let mut line = String::from("|");
            for (i, cell) in cells.iter().enumerate() {
                if right && i > 0 {
                    line.push_str(&format!(" {cell:>width$} |"));
                } else {
                    line.push_str(&format!(" {cell:<width$} |"));
                }
            }
            line.push('\n');
            line
        };

        let mut out = format!("=== {} ===\n", self.title);
        for p in &self.preamble {
            out.push_str(p);
            out.push('\n');
        }
        out.push_str(&border);
        out.push_str(&render(&self.header, false));
        out.push_str(&border);
        for line in &self.lines {
            match line {
                Line::Cells(cells) => out.push_str(&render(cells, true)),
                Line::Raw(raw) => {
                    out.push_str(raw);
                    out.push('\n');
                }
            }
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}
