//! Tabular Rows
//!
//! Fixed-shape column layout shared by every exported table.

/// Rounds a value to 4 decimal places.
/// Exact ties round to even, on the exact binary value.
pub fn round4(value: f64) -> f64 {
    format!("{:.4}", value).parse().unwrap_or(value)
}

/// A record that exports as one row of a table with a stable column list.
pub trait TableRow {
    /// Column names, in output order.
    const COLUMNS: &'static [&'static str];

    /// Cell values, in the same order as [`TableRow::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

/// Formats a float cell so whole numbers keep their decimal point (`1.0`, not `1`).
pub(crate) fn float_cell(value: f64) -> String {
    format!("{:?}", value)
}
