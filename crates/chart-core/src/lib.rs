// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod palette;
pub mod style;
pub mod legend;
pub mod text;
pub mod error;

pub use chart::{Chart, ChartLayout, GridLines, RenderOptions, SeriesGeometry, Title};
pub use series::{LineStyle, Marker, MarkerShape, Series};
pub use axis::{Axis, AxisKind, HAlign, Tick, TickFormatter};
pub use legend::{Legend, LegendLoc};
pub use view::ViewState;
pub use theme::Theme;
pub use palette::Palette;
pub use style::{FontRole, PlotContext, StyleSheet};
pub use text::TextShaper;
pub use types::Margins;
pub use error::{ChartError, ChartResult};
