// File: crates/revenue-chart/src/format.rs
// Summary: Tick label formatters registered on the revenue chart axes.

/// Abbreviated currency in thousands with no decimals: 45000 -> "$45K".
pub fn currency_thousands(value: f64) -> String {
    format!("${:.0}K", value / 1000.0)
}
