//! Simple Moving Average (SMA).
//!
//! Rolling mean over a window, returned compactly: output index `k` is the mean
//! of `values[k..k + window]`, so it aligns with source index `k + window - 1`.

use crate::error::ModelError;

/// Compute the simple moving average at every valid position.
///
/// Returns `max(0, n - window + 1)` values; an input shorter than the window
/// yields an empty vector. A zero window is an `InvalidArgument`.
///
/// The running sum adds the entering value and subtracts the leaving one in a
/// fixed order, so equal inputs give bit-identical outputs.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, ModelError> {
    if window == 0 {
        return Err(ModelError::InvalidArgument(
            "moving average window must be positive".into(),
        ));
    }
    let n = values.len();
    if n < window {
        return Ok(Vec::new());
    }

    let divisor = window as f64;
    let mut out = Vec::with_capacity(n - window + 1);

    let mut running: f64 = values[..window].iter().sum();
    out.push(running / divisor);

    for i in window..n {
        running += values[i] - values[i - window];
        out.push(running / divisor);
    }

    Ok(out)
}

/// Moving-average output index for source index `idx`: `idx - (window - 1)`.
///
/// `None` when `idx` precedes the first full window or `window` is zero.
pub fn ma_index(idx: usize, window: usize) -> Option<usize> {
    idx.checked_sub(window.checked_sub(1)?)
}
