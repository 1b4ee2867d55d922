//! Row coercer — turns one `|`-delimited table row into a [`MetricRow`].
//!
//! Numeric fields have `,` thousands separators removed before parsing. An
//! iteration key must look like digits (one `.` allowed) before it is
//! accepted, so border fragments and repeated header rows never become data.

use crate::error::RowError;
use crate::schema::TableLayout;
use crate::types::{ColumnRole, LogSection, MetricRow, RowKey};

/// Split a row on `|` and trim every piece. The leading and trailing pieces
/// outside the outer bars are kept (usually empty).
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

/// Parse a measurement, ignoring thousands separators. Non-finite values are
/// rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Digits only, after removing at most one `.`.
pub fn is_digit_like(raw: &str) -> bool {
    let stripped = raw.replacen('.', "", 1);
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Coerce one row against `layout`.
pub fn coerce_row(line: &str, layout: &TableLayout) -> Result<MetricRow, RowError> {
    let parts = split_fields(line);
    let expected = layout.width() + 1;
    if parts.len() < expected {
        return Err(RowError::TooFewFields {
            expected,
            found: parts.len(),
        });
    }

    // parts[0] is whatever precedes the first bar; column i sits at parts[i + 1].
    let key_raw = parts[1];
    let key = match layout.key_role() {
        ColumnRole::Iterations => {
            let cleaned = key_raw.replace(',', "");
            if !is_digit_like(&cleaned) {
                return Err(RowError::KeyNotNumeric {
                    value: key_raw.to_string(),
                });
            }
            let n = cleaned
                .parse::<f64>()
                .map_err(|_| RowError::KeyNotNumeric {
                    value: key_raw.to_string(),
                })?;
            RowKey::Iterations(n as u64)
        }
        _ => {
            if key_raw.is_empty() {
                return Err(RowError::EmptyLabel);
            }
            RowKey::Label(key_raw.to_string())
        }
    };

    let values = layout
        .measurement_roles()
        .zip(&parts[2..])
        .map(|(role, raw)| {
            parse_number(raw)
                .map(|v| (role, v))
                .ok_or_else(|| RowError::NotNumeric {
                    role,
                    value: raw.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MetricRow { key, values })
}

/// Coerce every row of a located section, dropping the ones that fail.
pub fn coerce_rows(section: &LogSection, layout: &TableLayout) -> Vec<MetricRow> {
    section
        .rows
        .iter()
        .filter_map(|line| match coerce_row(line, layout) {
            Ok(row) => Some(row),
            Err(err @ RowError::KeyNotNumeric { .. }) => {
                tracing::debug!(section = %section.title, %err, "skipping non-data row");
                None
            }
            Err(err) => {
                tracing::warn!(section = %section.title, %err, line = %line, "parse error, row skipped");
                None
            }
        })
        .collect()
}
