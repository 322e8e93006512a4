// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick location and labelling on linear and category axes.

use chart_core::axis::default_format;
use chart_core::grid::{linspace, nice_ticks};
use chart_core::{Axis, HAlign};

fn thousands(v: f64) -> String {
    format!("{:.0}k", v / 1000.0)
}

#[test]
fn linspace_includes_both_ends() {
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0, 3.0]);
}

#[test]
fn nice_ticks_pick_round_steps_inside_range() {
    assert_eq!(nice_ticks(15_150.0, 77_850.0, 9), vec![20_000.0, 30_000.0, 40_000.0, 50_000.0, 60_000.0, 70_000.0]);
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(nice_ticks(0.0, 10.0, 4), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn nice_ticks_degenerate_inputs() {
    assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    // reversed bounds behave like sorted ones
    assert_eq!(nice_ticks(1.0, 0.0, 5), nice_ticks(0.0, 1.0, 5));
}

#[test]
fn linear_axis_uses_registered_formatter() {
    let axis = Axis::new("Revenue", 15_150.0, 77_850.0).with_formatter(thousands);
    let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, ["20k", "30k", "40k", "50k", "60k", "70k"]);
}

#[test]
fn category_axis_keeps_declared_order() {
    let axis = Axis::category("Day", ["Mon", "Tue", "Wed"])
        .with_range(-0.1, 2.1)
        .with_tick_rotation(45.0, HAlign::Right);
    let ticks = axis.ticks();
    assert_eq!(ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(), ["Mon", "Tue", "Wed"]);
    assert_eq!(ticks.iter().map(|t| t.value).collect::<Vec<_>>(), [0.0, 1.0, 2.0]);
    assert_eq!(axis.category_position("Wed"), Some(2.0));
    assert_eq!(axis.tick_align, HAlign::Right);
}

#[test]
fn default_format_trims_fractions() {
    assert_eq!(default_format(20_000.0), "20000");
    assert_eq!(default_format(0.25), "0.25");
    assert_eq!(default_format(-1.5), "-1.5");
}
