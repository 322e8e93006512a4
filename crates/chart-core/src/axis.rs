// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, tick generation and tick formatting.

use crate::grid::nice_ticks;

/// Named tick formatter: maps a tick value to its label.
pub type TickFormatter = fn(f64) -> String;

#[derive(Clone, Debug, PartialEq)]
pub enum AxisKind {
    Linear,
    /// Ordered categories placed at positions 0, 1, .. n-1.
    Category(Vec<String>),
}

/// Horizontal anchoring of a tick label relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
    pub formatter: Option<TickFormatter>,
    /// Counter-clockwise rotation of tick labels, in degrees.
    pub tick_rotation: f32,
    pub tick_align: HAlign,
    /// Axis title size in points; `None` uses the style sheet default.
    pub label_size_pt: Option<f32>,
    pub label_bold: bool,
    /// Upper bound on linear tick intervals.
    pub max_bins: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: AxisKind::Linear,
            formatter: None,
            tick_rotation: 0.0,
            tick_align: HAlign::Center,
            label_size_pt: None,
            label_bold: false,
            max_bins: 9,
        }
    }

    pub fn linear(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    /// Category axis over `categories` in the given order.
    pub fn category<I, S>(label: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let max = categories.len().saturating_sub(1) as f64;
        let mut a = Self::new(label, 0.0, max);
        a.kind = AxisKind::Category(categories);
        a
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_formatter(mut self, formatter: TickFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32, align: HAlign) -> Self {
        self.tick_rotation = degrees;
        self.tick_align = align;
        self
    }

    pub fn with_label_style(mut self, size_pt: f32, bold: bool) -> Self {
        self.label_size_pt = Some(size_pt);
        self.label_bold = bold;
        self
    }

    pub fn is_category(&self) -> bool {
        matches!(self.kind, AxisKind::Category(_))
    }

    /// Position of `name` on a category axis.
    pub fn category_position(&self, name: &str) -> Option<f64> {
        match &self.kind {
            AxisKind::Category(cats) => cats.iter().position(|c| c == name).map(|i| i as f64),
            AxisKind::Linear => None,
        }
    }

    /// Ticks visible in `[min, max]`, labelled by the formatter when set.
    pub fn ticks(&self) -> Vec<Tick> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        match &self.kind {
            AxisKind::Category(cats) => cats
                .iter()
                .enumerate()
                .map(|(i, name)| (i as f64, name))
                .filter(|(v, _)| *v >= lo && *v <= hi)
                .map(|(value, name)| Tick {
                    value,
                    label: match self.formatter {
                        Some(f) => f(value),
                        None => name.clone(),
                    },
                })
                .collect(),
            AxisKind::Linear => nice_ticks(lo, hi, self.max_bins)
                .into_iter()
                .map(|value| Tick { value, label: self.format_value(value) })
                .collect(),
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        match self.formatter {
            Some(f) => f(value),
            None => default_format(value),
        }
    }
}

/// Plain numeric label: integers without a fraction, otherwise trimmed.
pub fn default_format(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{value:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
