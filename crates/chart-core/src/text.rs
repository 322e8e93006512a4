// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with bold, anchoring and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::axis::HAlign;

/// Vertical anchoring of a text box relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size_px: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size_px: f32, color: skia::Color) -> Self {
        Self { size_px, color, bold: false }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size_px.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Liberation Sans", "Segoe UI", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of the laid out text box.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` with its box anchored at `(x, y)`, rotated counter-clockwise
    /// by `rotation_deg` around the anchor.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        spec: &TextSpec,
        h: HAlign,
        v: VAlign,
        rotation_deg: f32,
    ) {
        let mut p = self.layout(text, spec);
        let (w, ht) = (p.longest_line(), p.height());
        let dx = match h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match v {
            VAlign::Top => 0.0,
            VAlign::Center => -ht * 0.5,
            VAlign::Bottom => -ht,
        };
        canvas.save();
        canvas.translate((x, y));
        if rotation_deg != 0.0 {
            // screen y points down, so counter-clockwise is negative
            canvas.rotate(-rotation_deg, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}
