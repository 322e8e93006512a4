// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Candidate step multipliers per decade, smallest first.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Pick "nice" tick values inside `[min, max]` using at most `max_bins`
/// intervals. Steps are drawn from 1, 2, 2.5, 5 times a power of ten, the
/// smallest one that fits wins.
pub fn nice_ticks(min: f64, max: f64, max_bins: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max_bins == 0 {
        return Vec::new();
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if span < 1e-12 {
        return vec![lo];
    }

    let raw = span / max_bins as f64;
    let decade = 10f64.powf(raw.log10().floor());
    let step = NICE_STEPS
        .iter()
        .map(|m| m * decade)
        .find(|s| *s >= raw - 1e-12 * decade)
        .unwrap_or(10.0 * decade);

    // one digit finer than the step's decade, enough for 2.5 multiples
    let digits = (-decade.log10().round()).max(0.0) as i32 + 1;
    let snap = 10f64.powi(digits);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        // drop float noise like 0.6000000000000001
        .map(|k| (k as f64 * step * snap).round() / snap)
        .collect()
}
