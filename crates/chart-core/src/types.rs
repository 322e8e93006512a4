// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, resolution, fractional margins).

use crate::geometry::RectF;

/// Default surface width in pixels.
pub const WIDTH: i32 = 512;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 512;
/// Default resolution used to convert points to pixels.
pub const DPI: f32 = 64.0;
/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Plot area placement as fractions of the figure, measured like
/// matplotlib's `subplots_adjust`: `left`/`right` from the left edge,
/// `bottom`/`top` from the bottom edge.
/// Contract: 0 <= left < right <= 1 and 0 <= bottom < top <= 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn is_valid(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.left)
            && unit.contains(&self.right)
            && unit.contains(&self.top)
            && unit.contains(&self.bottom)
            && self.left < self.right
            && self.bottom < self.top
    }

    /// Plot rectangle in screen pixels (y grows downward).
    pub fn plot_rect(&self, width: i32, height: i32) -> RectF {
        let w = width as f32;
        let h = height as f32;
        RectF::from_ltrb(w * self.left, h * (1.0 - self.top), w * self.right, h * (1.0 - self.bottom))
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.88, 0.11)
    }
}
