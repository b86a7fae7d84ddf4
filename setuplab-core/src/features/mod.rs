//! Feature extraction: per-candle setup features and next-candle labels.

pub mod dataset;
pub mod vector;

pub use dataset::{
    build_dataset, latest_features, Dataset, BREAKOUT_SPAN, DEFAULT_LONG_MA, DEFAULT_SHORT_MA,
    MOMENTUM_LOOKBACK,
};
pub use vector::{FeatureName, FeatureVector};
