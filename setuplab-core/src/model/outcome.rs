//! Setup outcome model — a lookup table of next-candle returns per bucket.
//!
//! State machine: unfitted → (`fit` succeeds) → fitted. A later successful
//! `fit` replaces the table wholesale; a failed `fit` leaves the previous
//! table and fitted state untouched. Predictions on an unfitted model fail
//! with `NotFitted`.
//!
//! Prediction for a bucket with `k` observations:
//! - `k == 0`: the global mean.
//! - `0 < k < min_samples`: `0.5 * bucket_mean + 0.5 * global_mean`.
//! - `k >= min_samples`: the bucket mean.

use crate::config::ModelConfig;
use crate::domain::{Candle, TradeDecision};
use crate::error::ModelError;
use crate::features::{build_dataset, FeatureVector, DEFAULT_LONG_MA, DEFAULT_SHORT_MA};
use crate::fingerprint::{ConfigHash, DatasetHash, FitParams};
use crate::model::BucketKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub const DEFAULT_MIN_SAMPLES: usize = 4;

/// Weight on the bucket mean when the bucket is below `min_samples`.
pub const LOW_CONFIDENCE_WEIGHT: f64 = 0.5;

/// Summary of one populated bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    pub key: BucketKey,
    pub count: usize,
    pub mean: f64,
}

/// Outcome of a successful `fit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub samples: usize,
    pub populated_buckets: usize,
    pub global_mean: f64,
    pub dataset_hash: DatasetHash,
    pub config_hash: ConfigHash,
}

/// Table built by one fit. Replaced as a whole, never appended to.
#[derive(Debug, Clone)]
struct FittedTable {
    buckets: HashMap<BucketKey, Vec<f64>>,
    global_mean: f64,
    params: FitParams,
}

#[derive(Debug, Clone)]
pub struct SetupOutcomeModel {
    min_samples: usize,
    fitted: Option<FittedTable>,
}

impl Default for SetupOutcomeModel {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SAMPLES)
    }
}

impl SetupOutcomeModel {
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples,
            fitted: None,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.min_samples)
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Mean of all training labels; `None` until fitted.
    pub fn global_mean(&self) -> Option<f64> {
        self.fitted.as_ref().map(|t| t.global_mean)
    }

    /// Window parameters of the current table; `None` until fitted.
    pub fn fit_params(&self) -> Option<FitParams> {
        self.fitted.as_ref().map(|t| t.params)
    }

    /// Learn per-bucket next-candle returns from a candle series.
    ///
    /// Fails with `InsufficientData` when `candles.len() <= long_ma` or no
    /// labeled row results, and with `InvalidArgument` for bad windows.
    pub fn fit(
        &mut self,
        candles: &[Candle],
        short_ma: usize,
        long_ma: usize,
    ) -> Result<FitReport, ModelError> {
        if candles.len() <= long_ma {
            warn!(candles = candles.len(), long_ma, "fit rejected: not enough candles");
            return Err(ModelError::InsufficientData {
                candles: candles.len(),
                required: long_ma,
            });
        }

        let dataset = build_dataset(candles, short_ma, long_ma)?;
        if dataset.is_empty() {
            warn!(candles = candles.len(), long_ma, "fit rejected: no labeled rows");
            return Err(ModelError::InsufficientData {
                candles: candles.len(),
                required: long_ma,
            });
        }

        let global_mean = mean(&dataset.labels);

        let mut buckets: HashMap<BucketKey, Vec<f64>> = HashMap::new();
        for (feature, label) in dataset.rows() {
            buckets.entry(BucketKey::of(feature)).or_default().push(label);
        }

        let params = FitParams {
            short_ma,
            long_ma,
            min_samples: self.min_samples,
        };
        let report = FitReport {
            samples: dataset.len(),
            populated_buckets: buckets.len(),
            global_mean,
            dataset_hash: DatasetHash::of(candles),
            config_hash: params.config_hash(),
        };

        for (key, values) in &buckets {
            debug!(bucket = %key, count = values.len(), "bucket populated");
        }
        info!(
            samples = report.samples,
            buckets = report.populated_buckets,
            global_mean,
            "fitted setup outcome model"
        );

        self.fitted = Some(FittedTable {
            buckets,
            global_mean,
            params,
        });
        Ok(report)
    }

    /// `fit` with the default 5/20 windows.
    pub fn fit_default(&mut self, candles: &[Candle]) -> Result<FitReport, ModelError> {
        self.fit(candles, DEFAULT_SHORT_MA, DEFAULT_LONG_MA)
    }

    /// `fit` with the windows from `config`.
    pub fn fit_with_config(
        &mut self,
        candles: &[Candle],
        config: &ModelConfig,
    ) -> Result<FitReport, ModelError> {
        self.fit(candles, config.short_ma, config.long_ma)
    }

    /// Expected next-candle return for the bucket `feature` falls in.
    pub fn predict_next_return(&self, feature: &FeatureVector) -> Result<f64, ModelError> {
        let table = self.fitted.as_ref().ok_or(ModelError::NotFitted)?;

        let values = match table.buckets.get(&BucketKey::of(feature)) {
            Some(values) if !values.is_empty() => values,
            _ => return Ok(table.global_mean),
        };

        let bucket_mean = mean(values);
        if values.len() < self.min_samples {
            return Ok(LOW_CONFIDENCE_WEIGHT * bucket_mean
                + (1.0 - LOW_CONFIDENCE_WEIGHT) * table.global_mean);
        }
        Ok(bucket_mean)
    }

    /// Enter iff the prediction is strictly above `min_expected_return`.
    pub fn decide_entry(
        &self,
        feature: &FeatureVector,
        min_expected_return: f64,
    ) -> Result<TradeDecision, ModelError> {
        let prediction = self.predict_next_return(feature)?;
        Ok(TradeDecision::from_prediction(prediction, min_expected_return))
    }

    /// `decide_entry` with the threshold from `config`.
    pub fn decide_with_config(
        &self,
        feature: &FeatureVector,
        config: &ModelConfig,
    ) -> Result<TradeDecision, ModelError> {
        self.decide_entry(feature, config.min_expected_return)
    }

    /// Bucket key for a feature vector. Usable before fitting.
    pub fn bucket_for(&self, feature: &FeatureVector) -> BucketKey {
        BucketKey::of(feature)
    }

    /// Populated buckets ordered by key. Empty until fitted.
    pub fn bucket_stats(&self) -> Vec<BucketStats> {
        let Some(table) = &self.fitted else {
            return Vec::new();
        };
        let mut stats: Vec<BucketStats> = table
            .buckets
            .iter()
            .map(|(key, values)| BucketStats {
                key: *key,
                count: values.len(),
                mean: mean(values),
            })
            .collect();
        stats.sort_by_key(|s| s.key);
        stats
    }
}

/// Arithmetic mean, summed in slice order. Callers guarantee non-empty input.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
