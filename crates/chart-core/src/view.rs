// File: crates/chart-core/src/view.rs
// Visible data ranges and the autoscale that fits them to the series.

use crate::axis::AxisKind;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data bounds of every series, widened by `margin` of each span on both sides.
    /// A category X axis spans all its categories even where no series has a point.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for ((xl, xh), (yl, yh)) in chart.series.iter().filter_map(|s| s.bounds()) {
            x_min = x_min.min(xl);
            x_max = x_max.max(xh);
            y_min = y_min.min(yl);
            y_max = y_max.max(yh);
        }
        if let AxisKind::Category(cats) = &chart.x_axis.kind {
            if !cats.is_empty() {
                x_min = x_min.min(0.0);
                x_max = x_max.max((cats.len() - 1) as f64);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
