// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (512, 512));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is outside the plot: opaque white figure background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn series_color_lands_on_the_line() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("flat", vec![(0.0, 2.0), (4.0, 2.0)]).with_line_width(4.0));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let geometry = chart.geometry(&opts).unwrap();
    let color = geometry[0].color;
    let (x, y) = geometry[0].points[0];
    let (x, y) = ((x + 40.0) as usize, y.round() as usize);

    let (px, _, _, stride) = chart.render_to_rgba8(&opts).unwrap();
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 3], &[color.r(), color.g(), color.b()]);
}
