use std::ops::Range;

pub const CHART_DIMS: (u32, u32) = (1024, 768);

/// Y range covering the finite values with 5% padding on each side. An
/// empty or all-non-finite series falls back to `0.0..1.0` so degenerate
/// charts still render deterministically.
pub fn padded_y_range(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }

    let y_min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_range = (y_max - y_min).max(0.01);
    (y_min - y_range * 0.05, y_max + y_range * 0.05)
}

/// X range from the first to the last episode of an ascending series,
/// widened to a unit span when there are fewer than two distinct episodes.
pub fn episode_range(series: &[(u32, f64)]) -> Range<u32> {
    match (series.first(), series.last()) {
        (Some(&(first, _)), Some(&(last, _))) if last > first => first..last,
        (Some(&(only, _)), _) => only..only + 1,
        _ => 0..1,
    }
}
