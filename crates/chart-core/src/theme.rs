// File: crates/chart-core/src/theme.rs
// Summary: Axes themes (whitegrid, darkgrid, white) controlling background, spines, grid and text colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub figure_background: skia::Color,
    pub axes_background: skia::Color,
    pub spine: skia::Color,
    pub grid: skia::Color,
    /// Whether gridlines are drawn unless the chart turns them on explicitly.
    pub grid_by_default: bool,
    pub text: skia::Color,
    pub legend_background: skia::Color,
    pub legend_edge: skia::Color,
}

impl Theme {
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            figure_background: skia::Color::WHITE,
            axes_background: skia::Color::WHITE,
            spine: gray(0.8),
            grid: gray(0.8),
            grid_by_default: true,
            text: gray(0.15),
            // white at 0.8 alpha
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: gray(0.8),
        }
    }

    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            figure_background: skia::Color::WHITE,
            axes_background: skia::Color::from_rgb(0xEA, 0xEA, 0xF2),
            spine: skia::Color::WHITE,
            grid: skia::Color::WHITE,
            grid_by_default: true,
            text: gray(0.15),
            legend_background: skia::Color::from_argb(204, 0xEA, 0xEA, 0xF2),
            legend_edge: gray(0.8),
        }
    }

    pub fn white() -> Self {
        Self {
            name: "white",
            figure_background: skia::Color::WHITE,
            axes_background: skia::Color::WHITE,
            spine: gray(0.15),
            grid: gray(0.8),
            grid_by_default: false,
            text: gray(0.15),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: gray(0.8),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::whitegrid() }
}

/// Opaque gray from a 0..1 lightness, matplotlib's `".8"` notation.
pub fn gray(level: f32) -> skia::Color {
    let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_rgb(v, v, v)
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::whitegrid(), Theme::darkgrid(), Theme::white()]
}

/// Find a theme by its `name`, falling back to whitegrid.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::whitegrid)
}
