// File: crates/chart-core/src/style.rs
// Summary: Per-render style sheet: theme, plotting context, font scale and palette.
// Notes:
// - Nothing here is global. Every render reads the `StyleSheet` carried by its
//   `RenderOptions`, so two charts in one process never share style state.

use crate::palette::Palette;
use crate::theme::Theme;
use crate::types::POINTS_PER_INCH;

/// Plotting context; scales every size relative to `Notebook`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotContext {
    Paper,
    Notebook,
    Talk,
    Poster,
}

impl PlotContext {
    pub fn scale(self) -> f32 {
        match self {
            PlotContext::Paper => 0.8,
            PlotContext::Notebook => 1.0,
            PlotContext::Talk => 1.5,
            PlotContext::Poster => 2.0,
        }
    }
}

/// Text roles with their own base size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Base,
    Title,
    AxisLabel,
    TickLabel,
    Legend,
    LegendTitle,
}

impl FontRole {
    /// Size at the notebook context, in points.
    fn base_pt(self) -> f32 {
        match self {
            FontRole::Base | FontRole::Title | FontRole::AxisLabel | FontRole::LegendTitle => 12.0,
            FontRole::TickLabel | FontRole::Legend => 11.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StyleSheet {
    pub theme: Theme,
    pub context: PlotContext,
    pub font_scale: f32,
    pub palette: Palette,
    pub dpi: f32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            context: PlotContext::Notebook,
            font_scale: 1.0,
            palette: Palette::default(),
            dpi: crate::types::DPI,
        }
    }
}

impl StyleSheet {
    pub fn new(theme: Theme, context: PlotContext, font_scale: f32, palette: Palette) -> Self {
        Self { theme, context, font_scale, palette, ..Self::default() }
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Font size for `role` in points, after context and font scaling.
    pub fn font_pt(&self, role: FontRole) -> f32 {
        role.base_pt() * self.context.scale() * self.font_scale
    }

    /// Non-text size (line widths, pads) in points, after context scaling.
    pub fn size_pt(&self, notebook_pt: f32) -> f32 {
        notebook_pt * self.context.scale()
    }

    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.dpi / POINTS_PER_INCH
    }

    pub fn spine_width_pt(&self) -> f32 { self.size_pt(1.25) }
    pub fn grid_width_pt(&self) -> f32 { self.size_pt(1.0) }
    pub fn tick_pad_pt(&self) -> f32 { self.size_pt(3.5) }
    pub fn label_pad_pt(&self) -> f32 { self.size_pt(4.0) }
}
