//! Three-axis binning of feature vectors.
//!
//! Each axis is binned independently against fixed cut points: the bin is the
//! position of the first cut point the value is strictly less than, or the
//! number of cut points if there is none (right-open bins). With three cuts
//! per axis there are 4 bins per axis and at most 64 buckets.

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TREND_CUTS: [f64; 3] = [-0.02, 0.0, 0.02];
pub const MOMENTUM_CUTS: [f64; 3] = [-0.03, 0.0, 0.03];
pub const BREAKOUT_CUTS: [f64; 3] = [-0.01, 0.0, 0.01];

/// Grouping key of the outcome table, one bin per feature axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BucketKey {
    pub trend: u8,
    pub momentum: u8,
    pub breakout: u8,
}

impl BucketKey {
    pub fn new(trend: u8, momentum: u8, breakout: u8) -> Self {
        Self {
            trend,
            momentum,
            breakout,
        }
    }

    /// Bucket a feature vector.
    pub fn of(feature: &FeatureVector) -> Self {
        Self {
            trend: bin(feature.trend_strength, &TREND_CUTS),
            momentum: bin(feature.momentum_lookback, &MOMENTUM_CUTS),
            breakout: bin(feature.breakout_distance, &BREAKOUT_CUTS),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.trend, self.momentum, self.breakout)
    }
}

/// Index of the first cut `value` is strictly below, else 3.
///
/// NaN compares false against every cut and lands in the last bin.
pub fn bin(value: f64, cuts: &[f64; 3]) -> u8 {
    match cuts.iter().position(|&cut| value < cut) {
        Some(0) => 0,
        Some(1) => 1,
        Some(_) => 2,
        None => 3,
    }
}
