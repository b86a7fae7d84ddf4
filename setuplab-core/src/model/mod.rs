//! Bucketed outcome model and the entry decision built on it.

pub mod bucket;
pub mod outcome;

pub use bucket::{bin, BucketKey, BREAKOUT_CUTS, MOMENTUM_CUTS, TREND_CUTS};
pub use outcome::{
    BucketStats, FitReport, SetupOutcomeModel, DEFAULT_MIN_SAMPLES, LOW_CONFIDENCE_WEIGHT,
};
