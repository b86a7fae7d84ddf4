//! Feature/label builder.
//!
//! For each candle index `idx` in `long_ma - 1 ..= n - 2` the builder emits
//! one `FeatureVector` and the realized next-candle return as its label. The
//! moving-average series are shorter than the candle series, so their
//! indices are offset: `short_idx = idx - (short_ma - 1)`,
//! `long_idx = idx - (long_ma - 1)`.

use crate::domain::Candle;
use crate::error::ModelError;
use crate::features::FeatureVector;
use crate::indicators::{
    lookback_return, ma_index, moving_average, relative_change, trailing_max,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candles between `close[idx]` and the momentum reference close.
pub const MOMENTUM_LOOKBACK: usize = 10;

/// Candles in the recent-high window, current candle included.
pub const BREAKOUT_SPAN: usize = 21;

pub const DEFAULT_SHORT_MA: usize = 5;
pub const DEFAULT_LONG_MA: usize = 20;

/// Aligned training rows. `indices[i]` is the candle index row `i` was computed at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub features: Vec<FeatureVector>,
    pub labels: Vec<f64>,
    pub indices: Vec<usize>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(feature, label)` pairs in candle order.
    pub fn rows(&self) -> impl Iterator<Item = (&FeatureVector, f64)> {
        self.features.iter().zip(self.labels.iter().copied())
    }
}

/// Columns and moving averages shared by every row of one build.
struct SeriesContext {
    closes: Vec<f64>,
    highs: Vec<f64>,
    short_series: Vec<f64>,
    long_series: Vec<f64>,
    short_ma: usize,
    long_ma: usize,
}

impl SeriesContext {
    /// Returns `None` when either moving average has no valid value.
    fn new(
        candles: &[Candle],
        short_ma: usize,
        long_ma: usize,
    ) -> Result<Option<Self>, ModelError> {
        check_windows(short_ma, long_ma)?;

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();

        let short_series = moving_average(&closes, short_ma)?;
        let long_series = moving_average(&closes, long_ma)?;
        if short_series.is_empty() || long_series.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            closes,
            highs,
            short_series,
            long_series,
            short_ma,
            long_ma,
        }))
    }

    /// Features at candle `idx`. `None` before the long window fills or past the end.
    fn features_at(&self, idx: usize) -> Option<FeatureVector> {
        let short_now = *self.short_series.get(ma_index(idx, self.short_ma)?)?;
        let long_now = *self.long_series.get(ma_index(idx, self.long_ma)?)?;
        let trend_strength = relative_change(short_now, long_now);

        let momentum_lookback = lookback_return(&self.closes, idx, MOMENTUM_LOOKBACK)?;

        let recent_high = trailing_max(&self.highs, idx, BREAKOUT_SPAN)?;
        let breakout_distance = relative_change(self.closes[idx], recent_high);

        Some(FeatureVector {
            trend_strength,
            momentum_lookback,
            breakout_distance,
        })
    }

    /// Next-candle return realized after `idx`.
    fn label_at(&self, idx: usize) -> f64 {
        relative_change(self.closes[idx + 1], self.closes[idx])
    }
}

/// Validates window sizes. The long window fixes the first valid row, so a
/// short window longer than it would index before the short series starts.
fn check_windows(short_ma: usize, long_ma: usize) -> Result<(), ModelError> {
    if short_ma == 0 || long_ma == 0 {
        return Err(ModelError::InvalidArgument(
            "moving average window must be positive".into(),
        ));
    }
    if short_ma > long_ma {
        return Err(ModelError::InvalidArgument(format!(
            "short_ma ({short_ma}) must not exceed long_ma ({long_ma})"
        )));
    }
    Ok(())
}

/// Build aligned features and next-candle labels.
///
/// Returns an empty dataset when `candles.len() <= long_ma`.
pub fn build_dataset(
    candles: &[Candle],
    short_ma: usize,
    long_ma: usize,
) -> Result<Dataset, ModelError> {
    let Some(ctx) = SeriesContext::new(candles, short_ma, long_ma)? else {
        debug!(candles = candles.len(), long_ma, "not enough history for moving averages");
        return Ok(Dataset::default());
    };

    let start = long_ma - 1;
    let end = candles.len().saturating_sub(1);
    let rows = end.saturating_sub(start);

    let mut dataset = Dataset {
        features: Vec::with_capacity(rows),
        labels: Vec::with_capacity(rows),
        indices: Vec::with_capacity(rows),
    };

    for idx in start..end {
        let Some(features) = ctx.features_at(idx) else {
            continue;
        };
        dataset.features.push(features);
        dataset.labels.push(ctx.label_at(idx));
        dataset.indices.push(idx);
    }

    debug!(
        candles = candles.len(),
        rows = dataset.len(),
        short_ma,
        long_ma,
        "built dataset"
    );
    Ok(dataset)
}

/// Features of the final candle, which has no label yet.
///
/// This is the vector a live caller hands to the decision layer. Returns
/// `None` when the series is shorter than `long_ma`.
pub fn latest_features(
    candles: &[Candle],
    short_ma: usize,
    long_ma: usize,
) -> Result<Option<FeatureVector>, ModelError> {
    let Some(ctx) = SeriesContext::new(candles, short_ma, long_ma)? else {
        return Ok(None);
    };
    Ok(ctx.features_at(candles.len() - 1))
}
