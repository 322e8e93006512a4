// File: crates/chart-core/tests/layout.rs
// Purpose: Fixed fractional layout, option validation and deterministic geometry.

use chart_core::{Axis, Chart, ChartError, Margins, Marker, Palette, RenderOptions, Series, StyleSheet};

#[test]
fn figure_inches_times_dpi_gives_pixels() {
    let opts = RenderOptions::figure(8.0, 8.0, 64.0);
    assert_eq!((opts.width, opts.height), (512, 512));
    assert_eq!(opts.style.dpi, 64.0);
    // one inch is 72 points
    assert!((opts.style.pt_to_px(72.0) - 64.0).abs() < 1e-4);
}

#[test]
fn fractional_margins_place_the_plot() {
    let m = Margins::new(0.12, 0.95, 0.93, 0.12);
    let r = m.plot_rect(512, 512);
    assert!((r.left - 61.44).abs() < 1e-3);
    assert!((r.right - 486.4).abs() < 1e-3);
    assert!((r.top - 35.84).abs() < 1e-3);
    assert!((r.bottom - 450.56).abs() < 1e-3);
}

#[test]
fn layout_does_not_depend_on_content() {
    let opts = RenderOptions::default().with_margins(Margins::new(0.12, 0.95, 0.93, 0.12));
    let empty = Chart::new().layout(&opts).unwrap();

    let mut busy = Chart::new();
    busy.y_axis = Axis::new("a very long label that would push an auto layout around", 0.0, 1e9);
    busy.add_series(Series::with_data("s", vec![(0.0, 0.0), (1.0, 1e9)]));
    let busy = busy.layout(&opts).unwrap();

    assert_eq!(empty, busy);
    assert_eq!((busy.width, busy.height), (512, 512));
}

#[test]
fn invalid_options_are_rejected() {
    let mut opts = RenderOptions::default();
    opts.width = 0;
    assert!(matches!(Chart::new().layout(&opts), Err(ChartError::InvalidSize { width: 0, .. })));

    let opts = RenderOptions::default().with_margins(Margins::new(0.9, 0.1, 0.9, 0.1));
    assert!(matches!(Chart::new().render_to_png_bytes(&opts), Err(ChartError::InvalidMargins { .. })));
}

#[test]
fn geometry_is_deterministic_and_palette_ordered() {
    let mut chart = Chart::new();
    for k in 0..3 {
        let data = (0..12).map(|i| (i as f64, (i * (k + 1)) as f64)).collect();
        chart.add_series(Series::with_data(format!("s{k}"), data).with_marker(Marker::circle(8.0)));
    }
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::figure(8.0, 8.0, 64.0);
    opts.style = StyleSheet { palette: Palette::set2(), ..opts.style.clone() };

    let first = chart.geometry(&opts).unwrap();
    let second = chart.geometry(&opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    for (i, g) in first.iter().enumerate() {
        assert_eq!(g.points.len(), 12);
        assert_eq!(g.color, Palette::set2().color(i));
        let r = g.marker_radius_px.unwrap();
        assert!((r - 8.0 * 64.0 / 72.0 / 2.0).abs() < 1e-4);
    }

    let plot = chart.layout(&opts).unwrap().plot;
    for g in &first {
        for &(x, y) in &g.points {
            assert!(plot.contains(x, y), "({x}, {y}) outside plot");
        }
    }
}
