// File: crates/chart-core/tests/style.rs
// Purpose: Style sheet scaling, theme/palette lookup and per-series color resolution.

use chart_core::scale::LinearScale;
use chart_core::{theme, Chart, FontRole, Palette, PlotContext, RenderOptions, Series, StyleSheet, Theme};
use skia_safe::Color;

#[test]
fn paper_context_with_font_scale() {
    let style = StyleSheet::new(Theme::whitegrid(), PlotContext::Paper, 1.2, Palette::set2());
    assert!((style.font_pt(FontRole::TickLabel) - 10.56).abs() < 1e-4);
    assert!((style.font_pt(FontRole::Title) - 11.52).abs() < 1e-4);
    // font scale leaves line widths alone
    assert!((style.spine_width_pt() - 1.0).abs() < 1e-6);
    assert_eq!(PlotContext::Poster.scale(), 2.0);
}

#[test]
fn style_sheets_are_independent_per_render() {
    let a = RenderOptions::default().with_style(StyleSheet::new(Theme::darkgrid(), PlotContext::Talk, 1.0, Palette::tab10()));
    let b = RenderOptions::default();
    assert_eq!(a.style.theme.name, "darkgrid");
    assert_eq!(b.style.theme.name, "whitegrid");
    assert_eq!(b.style.palette, Palette::deep());
}

#[test]
fn lookups_by_name() {
    assert_eq!(theme::find("DarkGrid").name, "darkgrid");
    assert_eq!(theme::find("no-such-theme").name, "whitegrid");
    assert_eq!(theme::gray(0.8), Color::from_rgb(204, 204, 204));
    assert_eq!(Palette::by_name("set2"), Some(Palette::set2()));
    assert!(Palette::by_name("viridis").is_none());
}

#[test]
fn palette_wraps_and_explicit_color_wins() {
    let set2 = Palette::set2();
    assert_eq!(set2.len(), 8);
    assert_eq!(set2.color(0), Color::from_rgb(0x66, 0xC2, 0xA5));
    assert_eq!(set2.color(8), set2.color(0));

    let mut chart = Chart::new();
    chart.add_series(Series::with_data("auto", vec![(0.0, 0.0), (1.0, 1.0)]));
    chart.add_series(Series::with_data("fixed", vec![(0.0, 1.0), (1.0, 0.0)]).with_color(Color::RED));
    let opts = RenderOptions::default().with_style(StyleSheet { palette: set2.clone(), ..StyleSheet::default() });
    let g = chart.geometry(&opts).unwrap();
    assert_eq!(g[0].color, set2.color(0));
    assert_eq!(g[1].color, Color::RED);
}

#[test]
fn linear_scale_inverts() {
    let s = LinearScale::new(450.0, 50.0, 0.0, 100.0);
    assert_eq!(s.to_px(0.0), 450.0);
    assert_eq!(s.to_px(100.0), 50.0);
    assert!((s.from_px(250.0) - 50.0).abs() < 1e-6);
}
