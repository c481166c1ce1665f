//! Order statistics over workload scores.

/// Linear-interpolation quantile of `values` at `q` in `[0, 1]`.
///
/// Matches the default definition used by numpy and pandas: with the values
/// sorted ascending and `h = (n - 1) * q`, the result is
/// `v[floor(h)] + (h - floor(h)) * (v[floor(h) + 1] - v[floor(h)])`.
///
/// Returns `None` for an empty slice. `q` is not range-checked here.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let last = sorted.len() - 1;
    let h = last as f64 * q;
    let lower = (h.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = h - h.floor();

    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Median of `values`; the mean of the two middle values for even lengths.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}
