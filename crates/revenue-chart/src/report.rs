// File: crates/revenue-chart/src/report.rs
// Summary: Assembles the revenue trend chart and its render options from the dataset.

use chart_core::{
    Axis, Chart, ChartResult, GridLines, HAlign, Legend, LegendLoc, Margins, Marker, Palette,
    PlotContext, RenderOptions, Series, StyleSheet, Theme, Title,
};
use tracing::debug;

use crate::dataset::{Month, RevenueDataset};
use crate::format::currency_thousands;

/// Output artifact, relative to the working directory.
pub const OUTPUT_PATH: &str = "chart.png";

pub const TITLE: &str = "Monthly Revenue Trend by Customer Segment";
pub const X_LABEL: &str = "Month";
pub const Y_LABEL: &str = "Revenue ($)";
pub const LEGEND_TITLE: &str = "Customer Segment";

/// 8 x 8 inches at 64 dpi is 512 x 512 pixels.
pub const FIGURE_INCHES: f32 = 8.0;
pub const FIGURE_DPI: f32 = 64.0;

pub const LINE_WIDTH_PT: f32 = 2.5;
pub const MARKER_SIZE_PT: f32 = 8.0;
pub const TITLE_SIZE_PT: f32 = 14.0;
pub const TITLE_PAD_PT: f32 = 15.0;
pub const AXIS_LABEL_SIZE_PT: f32 = 11.0;
pub const LEGEND_TITLE_SIZE_PT: f32 = 10.0;
pub const LEGEND_SIZE_PT: f32 = 9.0;
pub const X_TICK_ROTATION_DEG: f32 = 45.0;
pub const GRID_ALPHA: f32 = 0.3;
/// Autoscale padding as a fraction of the data span.
pub const DATA_MARGIN: f64 = 0.05;

/// Fixed plot placement; no auto-fit, so the canvas size never changes.
pub const MARGINS: Margins = Margins::new(0.12, 0.95, 0.93, 0.12);

/// Whitegrid theme, paper context at 1.2x fonts, Set2 palette.
pub fn style_sheet() -> StyleSheet {
    StyleSheet::new(Theme::whitegrid(), PlotContext::Paper, 1.2, Palette::set2())
}

pub fn render_options() -> RenderOptions {
    RenderOptions::figure(FIGURE_INCHES, FIGURE_INCHES, FIGURE_DPI)
        .with_margins(MARGINS)
        .with_style(style_sheet())
}

/// One line per segment over calendar-ordered month categories.
pub fn revenue_chart(dataset: &RevenueDataset) -> Chart {
    let mut chart = Chart::new();
    chart.title = Some(Title::new(TITLE).with_size(TITLE_SIZE_PT).bold().with_pad(TITLE_PAD_PT));
    chart.x_axis = Axis::category(X_LABEL, Month::ALL.iter().map(|m| m.label()))
        .with_tick_rotation(X_TICK_ROTATION_DEG, HAlign::Right)
        .with_label_style(AXIS_LABEL_SIZE_PT, true);
    chart.y_axis = Axis::linear(Y_LABEL)
        .with_formatter(currency_thousands)
        .with_label_style(AXIS_LABEL_SIZE_PT, true);
    chart.legend = Some(
        Legend::titled(LEGEND_TITLE)
            .with_sizes(LEGEND_TITLE_SIZE_PT, LEGEND_SIZE_PT)
            .at(LegendLoc::UpperLeft)
            .with_frame(true),
    );
    chart.grid = GridLines::dashed(GRID_ALPHA);

    for segment in dataset.segments() {
        let data = dataset
            .series_for(segment)
            .into_iter()
            .map(|(month, revenue)| (month.index() as f64, revenue))
            .collect();
        chart.add_series(
            Series::with_data(segment.label(), data)
                .with_line_width(LINE_WIDTH_PT)
                .with_marker(Marker::circle(MARKER_SIZE_PT)),
        );
    }
    chart.autoscale_axes(DATA_MARGIN);
    debug!(
        series = chart.series.len(),
        y_min = chart.y_axis.min,
        y_max = chart.y_axis.max,
        "assembled revenue chart"
    );
    chart
}

/// Build the chart from `dataset` and write it to `path`.
pub fn render(dataset: &RevenueDataset, path: impl AsRef<std::path::Path>) -> ChartResult<RenderOptions> {
    let opts = render_options();
    revenue_chart(dataset).render_to_png(&opts, path)?;
    Ok(opts)
}

/// The line printed once the image has been written.
pub fn completion_message(opts: &RenderOptions) -> String {
    format!("Chart generated successfully: {OUTPUT_PATH} ({}x{} pixels)", opts.width, opts.height)
}
