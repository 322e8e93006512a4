// File: crates/revenue-chart/src/main.rs
// Summary: Renders the monthly revenue trend chart to chart.png and reports completion.

use anyhow::Result;
use revenue_chart::{completion_message, render, RevenueDataset, OUTPUT_PATH};

fn main() -> Result<()> {
    let _ = revenue_chart::telemetry::init_tracing();

    let dataset = RevenueDataset::generate();
    let opts = render(&dataset, OUTPUT_PATH)?;

    println!("{}", completion_message(&opts));
    Ok(())
}
