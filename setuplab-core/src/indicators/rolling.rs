//! Trailing-window extremes and lookback returns over raw candle fields.
//!
//! Unlike the moving average these are evaluated at a single index with a
//! window clamped at the start of the series, so early indices still produce
//! a value from the shorter history available.

/// Maximum of `values[max(0, idx + 1 - span)..=idx]`.
///
/// `span` counts the current index. Returns `None` when `idx` is out of range
/// or `span` is zero.
pub fn trailing_max(values: &[f64], idx: usize, span: usize) -> Option<f64> {
    if span == 0 || idx >= values.len() {
        return None;
    }
    let start = (idx + 1).saturating_sub(span);
    values[start..=idx].iter().copied().reduce(f64::max)
}

/// Fractional change from `values[max(0, idx - lookback)]` to `values[idx]`.
///
/// A zero reference value yields 0.0. Returns `None` when `idx` is out of range.
pub fn lookback_return(values: &[f64], idx: usize, lookback: usize) -> Option<f64> {
    let current = *values.get(idx)?;
    let reference = values[idx.saturating_sub(lookback)];
    Some(relative_change(current, reference))
}

/// `(value - base) / base`, or 0.0 when `base` is exactly zero.
pub fn relative_change(value: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        (value - base) / base
    }
}
