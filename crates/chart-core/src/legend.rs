// File: crates/chart-core/src/legend.rs
// Summary: Legend model: title, font sizes, placement and frame.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: Option<String>,
    /// Title size in points; `None` uses the style sheet.
    pub title_size_pt: Option<f32>,
    /// Entry size in points; `None` uses the style sheet.
    pub size_pt: Option<f32>,
    pub loc: LegendLoc,
    pub frame: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self { title: None, title_size_pt: None, size_pt: None, loc: LegendLoc::UpperRight, frame: true }
    }
}

impl Legend {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn at(mut self, loc: LegendLoc) -> Self {
        self.loc = loc;
        self
    }

    pub fn with_sizes(mut self, title_size_pt: f32, size_pt: f32) -> Self {
        self.title_size_pt = Some(title_size_pt);
        self.size_pt = Some(size_pt);
        self
    }

    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }
}

// Spacing below is in units of the entry font size.
pub(crate) const BORDER_PAD: f32 = 0.4;
pub(crate) const BORDER_AXES_PAD: f32 = 0.5;
pub(crate) const HANDLE_LENGTH: f32 = 2.0;
pub(crate) const HANDLE_TEXT_PAD: f32 = 0.8;
pub(crate) const LABEL_SPACING: f32 = 0.5;
