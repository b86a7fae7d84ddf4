//! Fit fingerprinting — deterministic identification of training inputs.
//!
//! - `DatasetHash`: BLAKE3 over every candle's OHLCV bytes, in series order.
//! - `ConfigHash`: BLAKE3 over the canonical JSON of the fit parameters.
//!
//! Two fits with equal hashes produce identical tables.

use crate::domain::Candle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetHash(pub String);

impl DatasetHash {
    pub fn of(candles: &[Candle]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(candles.len() as u64).to_le_bytes());
        for candle in candles {
            hasher.update(&candle.open.to_le_bytes());
            hasher.update(&candle.high.to_le_bytes());
            hasher.update(&candle.low.to_le_bytes());
            hasher.update(&candle.close.to_le_bytes());
            hasher.update(&candle.volume.to_le_bytes());
        }
        Self(hasher.finalize().to_hex().to_string())
    }
}

impl fmt::Display for DatasetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigHash(pub String);

impl fmt::Display for ConfigHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters that shape a fitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitParams {
    pub short_ma: usize,
    pub long_ma: usize,
    pub min_samples: usize,
}

impl FitParams {
    pub fn config_hash(&self) -> ConfigHash {
        // Field order is fixed by the struct, so the JSON is canonical.
        let json = serde_json::json!({
            "short_ma": self.short_ma,
            "long_ma": self.long_ma,
            "min_samples": self.min_samples,
        });
        ConfigHash(blake3::hash(json.to_string().as_bytes()).to_hex().to_string())
    }
}
