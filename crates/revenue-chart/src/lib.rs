// File: crates/revenue-chart/src/lib.rs
// Summary: Monthly revenue by customer segment: dataset, formatting and chart assembly.

pub mod dataset;
pub mod format;
pub mod report;
pub mod telemetry;

pub use dataset::{Month, RevenueDataset, RevenueRecord, Segment};
pub use format::currency_thousands;
pub use report::{completion_message, render, render_options, revenue_chart, OUTPUT_PATH};
