// File: crates/chart-core/src/series.rs
// Summary: Named line series with stroke and marker styling.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub shape: MarkerShape,
    /// Marker diameter in points.
    pub size_pt: f32,
    pub edge_color: skia::Color,
    pub edge_width_pt: f32,
}

impl Marker {
    /// Filled circle with a thin white edge.
    pub fn circle(size_pt: f32) -> Self {
        Self { shape: MarkerShape::Circle, size_pt, edge_color: skia::Color::WHITE, edge_width_pt: 0.75 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Explicit color; `None` takes the next palette color.
    pub color: Option<skia::Color>,
    pub width_pt: f32,
    pub marker: Option<Marker>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: None, width_pt: 1.5, marker: None }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: LineStyle,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), style: LineStyle::default() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, style: LineStyle::default() }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_line_width(mut self, width_pt: f32) -> Self {
        self.style.width_pt = width_pt;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.style.marker = Some(marker);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Min/max over finite points as `((x_min, x_max), (y_min, y_max))`.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut pts = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = pts.next()?;
        Some(pts.fold(((x0, x0), (y0, y0)), |((xl, xh), (yl, yh)), &(x, y)| {
            ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))
        }))
    }
}
