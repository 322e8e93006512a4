// File: crates/chart-core/benches/render_bench.rs
// Summary: Render cost of a small styled multi-series line chart, with and without text.

use anyhow::Result;
use chart_core::{Axis, Chart, GridLines, Legend, LegendLoc, Marker, Palette, PlotContext, RenderOptions, Series, StyleSheet, Theme, Title};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(series: usize, points: usize) -> Chart {
    let mut ch = Chart::new();
    ch.title = Some(Title::new("Bench").bold());
    ch.x_axis = Axis::category("Bucket", (0..points).map(|i| format!("b{i}")));
    ch.grid = GridLines::dashed(0.3);
    ch.legend = Some(Legend::titled("Series").at(LegendLoc::UpperLeft));
    for k in 0..series {
        let data = (0..points).map(|i| (i as f64, (i as f64 * 0.7).sin() * 10.0 + k as f64 * 20.0)).collect();
        ch.add_series(Series::with_data(format!("s{k}"), data).with_line_width(2.5).with_marker(Marker::circle(8.0)));
    }
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let ch = build_chart(3, 12);
    let style = StyleSheet::new(Theme::whitegrid(), PlotContext::Paper, 1.2, Palette::set2());
    let mut group = c.benchmark_group("render_png_bytes");
    for labels in [false, true] {
        group.bench_function(format!("3x12_labels_{labels}"), |b| {
            let mut opts = RenderOptions::figure(8.0, 8.0, 64.0).with_style(style.clone());
            opts.draw_labels = labels;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
