// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps a data interval onto a pixel interval. `px_start` corresponds to
/// `vmin`; for a Y scale pass the bottom pixel as `px_start`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.vmax - self.vmin;
        let len = self.px_end - self.px_start;
        if len.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.px_start) / len) as f64 * span
    }
}
