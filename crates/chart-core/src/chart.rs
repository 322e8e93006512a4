// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{Axis, HAlign};
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::legend::{self, Legend, LegendLoc};
use crate::scale::LinearScale;
use crate::series::{MarkerShape, Series};
use crate::style::{FontRole, StyleSheet};
use crate::text::{TextShaper, TextSpec, VAlign};
use crate::types::{Margins, HEIGHT, WIDTH};
use crate::view::ViewState;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub margins: Margins,
    pub style: StyleSheet,
    /// Skip all text (title, ticks, axis labels, legend) for font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            style: StyleSheet::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Canvas sized like a figure of `width_in` x `height_in` inches at `dpi`.
    pub fn figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        let mut opts = Self::default();
        opts.width = (width_in * dpi).round() as i32;
        opts.height = (height_in * dpi).round() as i32;
        opts.style.dpi = dpi;
        opts
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Replace the style sheet, keeping the figure resolution.
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        let dpi = self.style.dpi;
        self.style = style.with_dpi(dpi);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ChartError::InvalidSize { width: self.width, height: self.height });
        }
        if !self.margins.is_valid() {
            let m = self.margins;
            return Err(ChartError::InvalidMargins { left: m.left, right: m.right, top: m.top, bottom: m.bottom });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
    /// Size in points; `None` uses the style sheet.
    pub size_pt: Option<f32>,
    pub bold: bool,
    /// Gap between the title and the top of the plot, in points.
    pub pad_pt: f32,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), size_pt: None, bold: false, pad_pt: 6.0 }
    }
    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
    pub fn with_pad(mut self, pad_pt: f32) -> Self {
        self.pad_pt = pad_pt;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    /// `None` follows the theme.
    pub visible: Option<bool>,
    /// Dash on/off lengths in multiples of the grid line width.
    pub dash: Option<(f32, f32)>,
    pub alpha: f32,
}

impl Default for GridLines {
    fn default() -> Self {
        Self { visible: None, dash: None, alpha: 1.0 }
    }
}

impl GridLines {
    /// Dashed gridlines (matplotlib's `--` pattern) at `alpha` opacity.
    pub fn dashed(alpha: f32) -> Self {
        Self { visible: Some(true), dash: Some((3.7, 1.6)), alpha: alpha.clamp(0.0, 1.0) }
    }
}

/// Pixel placement of the plot area on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub plot: RectF,
}

/// Resolved pixel geometry of one series, exactly as the renderer draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub name: String,
    pub color: skia::Color,
    pub points: Vec<(f32, f32)>,
    pub line_width_px: f32,
    pub marker_radius_px: Option<f32>,
}

#[derive(Clone)]
pub struct Chart {
    pub title: Option<Title>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
    pub grid: GridLines,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
            grid: GridLines::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding each side by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    pub fn layout(&self, opts: &RenderOptions) -> ChartResult<ChartLayout> {
        opts.validate()?;
        Ok(ChartLayout {
            width: opts.width,
            height: opts.height,
            plot: opts.margins.plot_rect(opts.width, opts.height),
        })
    }

    fn scales(&self, plot: &RectF) -> (LinearScale, LinearScale) {
        (
            LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max),
            LinearScale::new(plot.bottom, plot.top, self.y_axis.min, self.y_axis.max),
        )
    }

    /// Pixel geometry for every series, in insertion order.
    pub fn geometry(&self, opts: &RenderOptions) -> ChartResult<Vec<SeriesGeometry>> {
        let layout = self.layout(opts)?;
        let (sx, sy) = self.scales(&layout.plot);
        let style = &opts.style;
        Ok(self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| SeriesGeometry {
                name: s.name.clone(),
                color: s.style.color.unwrap_or_else(|| style.palette.color(i)),
                points: s
                    .data_xy
                    .iter()
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)))
                    .collect(),
                line_width_px: style.pt_to_px(s.style.width_pt),
                marker_radius_px: s.style.marker.map(|m| style.pt_to_px(m.size_pt) * 0.5),
            })
            .collect())
    }

    /// Render into an RGBA8 buffer: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let layout = self.layout(opts)?;
        let (w, h) = (layout.width, layout.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::SurfaceCreation { width: w, height: h })?;

        let geometry = self.geometry(opts)?;
        self.draw(surface.canvas(), opts, &layout, &geometry);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        debug!(width = w, height = h, series = geometry.len(), "rendered chart to raster surface");
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let image = image::RgbaImage::from_raw(w, h, pixels).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> ChartResult<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart PNG");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, layout: &ChartLayout, geometry: &[SeriesGeometry]) {
        let style = &opts.style;
        let plot = layout.plot;

        canvas.clear(style.theme.figure_background);
        let mut fill = skia::Paint::default();
        fill.set_color(style.theme.axes_background);
        canvas.draw_rect(plot.to_skia(), &fill);

        let x_ticks = self.x_axis.ticks();
        let y_ticks = self.y_axis.ticks();
        let (sx, sy) = self.scales(&plot);

        if self.grid.visible.unwrap_or(style.theme.grid_by_default) {
            let xs: Vec<f32> = x_ticks.iter().map(|t| sx.to_px(t.value)).collect();
            let ys: Vec<f32> = y_ticks.iter().map(|t| sy.to_px(t.value)).collect();
            draw_grid(canvas, &plot, &xs, &ys, &self.grid, style);
        }
        draw_spines(canvas, &plot, style);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (g, s) in geometry.iter().zip(&self.series) {
            draw_line_series(canvas, g, s, style);
        }
        canvas.restore();

        if !opts.draw_labels {
            return;
        }

        let shaper = TextShaper::new();
        let text_color = style.theme.text;
        let tick_spec = TextSpec::new(style.pt_to_px(style.font_pt(FontRole::TickLabel)), text_color);
        let pad = style.pt_to_px(style.tick_pad_pt());
        let label_pad = style.pt_to_px(style.label_pad_pt());

        // Y tick labels, right aligned against the plot.
        let mut y_tick_width = 0.0f32;
        for t in &y_ticks {
            let (w, _) = shaper.measure(&t.label, &tick_spec);
            y_tick_width = y_tick_width.max(w);
            shaper.draw_anchored(canvas, &t.label, plot.left - pad, sy.to_px(t.value), &tick_spec, HAlign::Right, VAlign::Center, 0.0);
        }

        // X tick labels, optionally rotated about their anchor.
        let rot = self.x_axis.tick_rotation;
        let (sin, cos) = (rot.to_radians().sin().abs(), rot.to_radians().cos().abs());
        let mut x_tick_bottom = plot.bottom + pad;
        for t in &x_ticks {
            let (w, h) = shaper.measure(&t.label, &tick_spec);
            let x = sx.to_px(t.value);
            if rot == 0.0 {
                shaper.draw_anchored(canvas, &t.label, x, plot.bottom + pad, &tick_spec, HAlign::Center, VAlign::Top, 0.0);
                x_tick_bottom = x_tick_bottom.max(plot.bottom + pad + h);
            } else {
                let y = plot.bottom + pad + h * 0.5;
                shaper.draw_anchored(canvas, &t.label, x, y, &tick_spec, self.x_axis.tick_align, VAlign::Center, rot);
                x_tick_bottom = x_tick_bottom.max(y + w * sin + h * 0.5 * cos);
            }
        }

        let axis_spec = |axis: &Axis| {
            let size = axis.label_size_pt.unwrap_or_else(|| style.font_pt(FontRole::AxisLabel));
            let spec = TextSpec::new(style.pt_to_px(size), text_color);
            if axis.label_bold { spec.bold() } else { spec }
        };
        if !self.x_axis.label.is_empty() {
            let spec = axis_spec(&self.x_axis);
            shaper.draw_anchored(canvas, &self.x_axis.label, plot.center_x(), x_tick_bottom + label_pad, &spec, HAlign::Center, VAlign::Top, 0.0);
        }
        if !self.y_axis.label.is_empty() {
            let spec = axis_spec(&self.y_axis);
            let x = plot.left - pad - y_tick_width - label_pad;
            shaper.draw_anchored(canvas, &self.y_axis.label, x, plot.center_y(), &spec, HAlign::Center, VAlign::Bottom, 90.0);
        }

        if let Some(title) = &self.title {
            let size = title.size_pt.unwrap_or_else(|| style.font_pt(FontRole::Title));
            let mut spec = TextSpec::new(style.pt_to_px(size), text_color);
            if title.bold { spec = spec.bold(); }
            let y = plot.top - style.pt_to_px(title.pad_pt);
            shaper.draw_anchored(canvas, &title.text, plot.center_x(), y, &spec, HAlign::Center, VAlign::Bottom, 0.0);
        }

        if let Some(legend) = &self.legend {
            draw_legend(canvas, &shaper, legend, &plot, geometry, &self.series, style);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: &RectF, xs: &[f32], ys: &[f32], grid: &GridLines, style: &StyleSheet) {
    let width_pt = style.grid_width_pt();
    let mut paint = skia::Paint::default();
    paint.set_color(style.theme.grid);
    paint.set_alpha_f(grid.alpha);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.pt_to_px(width_pt));
    if let Some((on, off)) = grid.dash {
        let intervals = [style.pt_to_px(on * width_pt), style.pt_to_px(off * width_pt)];
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }

    for &x in xs {
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for &y in ys {
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: &RectF, style: &StyleSheet) {
    let mut paint = skia::Paint::default();
    paint.set_color(style.theme.spine);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.pt_to_px(style.spine_width_pt()));
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, g: &SeriesGeometry, series: &Series, style: &StyleSheet) {
    if g.points.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(g.points[0]);
        for &p in g.points.iter().skip(1) {
            path.line_to(p);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_width(g.line_width_px);
        stroke.set_color(g.color);
        canvas.draw_path(&path, &stroke);
    }

    if let (Some(marker), Some(radius)) = (series.style.marker, g.marker_radius_px) {
        for &p in &g.points {
            draw_marker(canvas, p, radius, marker.shape, g.color, marker.edge_color, style.pt_to_px(marker.edge_width_pt));
        }
    }
}

fn draw_marker(
    canvas: &skia::Canvas,
    center: (f32, f32),
    radius: f32,
    shape: MarkerShape,
    face: skia::Color,
    edge: skia::Color,
    edge_width: f32,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(face);
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(edge_width);
    stroke.set_color(edge);

    match shape {
        MarkerShape::Circle => {
            canvas.draw_circle(center, radius, &fill);
            if edge_width > 0.0 { canvas.draw_circle(center, radius, &stroke); }
        }
        MarkerShape::Square => {
            let rect = skia::Rect::from_xywh(center.0 - radius, center.1 - radius, radius * 2.0, radius * 2.0);
            canvas.draw_rect(rect, &fill);
            if edge_width > 0.0 { canvas.draw_rect(rect, &stroke); }
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    legend: &Legend,
    plot: &RectF,
    geometry: &[SeriesGeometry],
    series: &[Series],
    style: &StyleSheet,
) {
    if geometry.is_empty() { return; }
    let text = style.theme.text;
    let entry_px = style.pt_to_px(legend.size_pt.unwrap_or_else(|| style.font_pt(FontRole::Legend)));
    let title_px = style.pt_to_px(legend.title_size_pt.unwrap_or_else(|| style.font_pt(FontRole::LegendTitle)));
    let entry_spec = TextSpec::new(entry_px, text);
    let title_spec = TextSpec::new(title_px, text);

    let pad = legend::BORDER_PAD * entry_px;
    let handle = legend::HANDLE_LENGTH * entry_px;
    let handle_gap = legend::HANDLE_TEXT_PAD * entry_px;
    let spacing = legend::LABEL_SPACING * entry_px;

    let labels: Vec<(f32, f32)> = geometry.iter().map(|g| shaper.measure(&g.name, &entry_spec)).collect();
    let title_size = legend.title.as_deref().map(|t| shaper.measure(t, &title_spec));
    let label_w = labels.iter().map(|l| l.0).fold(0.0f32, f32::max);
    let row_h = labels.iter().map(|l| l.1).fold(entry_px, f32::max);

    let content_w = (handle + handle_gap + label_w).max(title_size.map_or(0.0, |t| t.0));
    let rows = geometry.len() as f32;
    let mut content_h = rows * row_h + (rows - 1.0) * spacing;
    if let Some((_, th)) = title_size { content_h += th + spacing; }
    let box_w = content_w + 2.0 * pad;
    let box_h = content_h + 2.0 * pad;

    let inset = legend::BORDER_AXES_PAD * entry_px;
    let (left, top) = match legend.loc {
        LegendLoc::UpperLeft => (plot.left + inset, plot.top + inset),
        LegendLoc::UpperRight => (plot.right - inset - box_w, plot.top + inset),
        LegendLoc::LowerLeft => (plot.left + inset, plot.bottom - inset - box_h),
        LegendLoc::LowerRight => (plot.right - inset - box_w, plot.bottom - inset - box_h),
    };
    let frame = RectF::from_ltwh(left, top, box_w, box_h);

    if legend.frame {
        let corner = 0.2 * entry_px;
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(style.theme.legend_background);
        canvas.draw_round_rect(frame.to_skia(), corner, corner, &bg);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(style.pt_to_px(style.size_pt(1.0)));
        edge.set_color(style.theme.legend_edge);
        canvas.draw_round_rect(frame.to_skia(), corner, corner, &edge);
    }

    let mut y = top + pad;
    if let (Some(title), Some((_, th))) = (legend.title.as_deref(), title_size) {
        shaper.draw_anchored(canvas, title, frame.center_x(), y, &title_spec, HAlign::Center, VAlign::Top, 0.0);
        y += th + spacing;
    }

    let x0 = left + pad;
    for (g, s) in geometry.iter().zip(series) {
        let cy = y + row_h * 0.5;
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(g.line_width_px);
        stroke.set_color(g.color);
        canvas.draw_line((x0, cy), (x0 + handle, cy), &stroke);
        if let (Some(marker), Some(radius)) = (s.style.marker, g.marker_radius_px) {
            draw_marker(canvas, (x0 + handle * 0.5, cy), radius, marker.shape, g.color, marker.edge_color, style.pt_to_px(marker.edge_width_pt));
        }
        shaper.draw_anchored(canvas, &g.name, x0 + handle + handle_gap, cy, &entry_spec, HAlign::Left, VAlign::Center, 0.0);
        y += row_h + spacing;
    }
}
