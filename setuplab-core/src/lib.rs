//! Setuplab Core — setup features, bucketed outcome model, entry decisions.
//!
//! Pipeline: candles → moving averages → per-candle features and
//! next-candle labels → a lookup table of mean returns per feature bucket →
//! an enter/skip decision against a return threshold.
//!
//! - Domain types (candles, trade decisions)
//! - Sliding-sum moving average and trailing-window helpers
//! - Feature/label builder with moving-average index alignment
//! - `SetupOutcomeModel`: fit, confidence-blended prediction, decision
//! - TOML model configuration and BLAKE3 fit fingerprints
//!
//! Everything is synchronous and single-threaded. A model instance must not
//! be fitted while another caller reads it; serialize access externally.

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod fingerprint;
pub mod indicators;
pub mod model;
pub mod synthetic;

pub use config::{ConfigError, ModelConfig};
pub use domain::{Candle, DecisionReason, TradeDecision};
pub use error::ModelError;
pub use features::{build_dataset, latest_features, Dataset, FeatureName, FeatureVector};
pub use indicators::moving_average;
pub use model::{BucketKey, BucketStats, FitReport, SetupOutcomeModel};
