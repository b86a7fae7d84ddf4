//! Per-timestep setup features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of one feature axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    TrendStrength,
    MomentumLookback,
    BreakoutDistance,
}

impl FeatureName {
    pub const ALL: [FeatureName; 3] = [
        FeatureName::TrendStrength,
        FeatureName::MomentumLookback,
        FeatureName::BreakoutDistance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureName::TrendStrength => "trend_strength",
            FeatureName::MomentumLookback => "momentum_lookback",
            FeatureName::BreakoutDistance => "breakout_distance",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend, momentum and breakout readings for one candle.
///
/// - `trend_strength`: short MA relative to long MA.
/// - `momentum_lookback`: close relative to the close 10 candles back.
/// - `breakout_distance`: close relative to the highest high of the trailing 21 candles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub trend_strength: f64,
    pub momentum_lookback: f64,
    pub breakout_distance: f64,
}

impl FeatureVector {
    pub fn new(trend_strength: f64, momentum_lookback: f64, breakout_distance: f64) -> Self {
        Self {
            trend_strength,
            momentum_lookback,
            breakout_distance,
        }
    }

    pub fn get(&self, name: FeatureName) -> f64 {
        match name {
            FeatureName::TrendStrength => self.trend_strength,
            FeatureName::MomentumLookback => self.momentum_lookback,
            FeatureName::BreakoutDistance => self.breakout_distance,
        }
    }

    /// `(name, value)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FeatureName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_access_matches_fields() {
        let fv = FeatureVector::new(0.01, -0.02, 0.03);
        assert_eq!(fv.get(FeatureName::TrendStrength), 0.01);
        assert_eq!(fv.get(FeatureName::MomentumLookback), -0.02);
        assert_eq!(fv.get(FeatureName::BreakoutDistance), 0.03);
        let names: Vec<&str> = fv.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["trend_strength", "momentum_lookback", "breakout_distance"]
        );
    }

    #[test]
    fn serializes_with_named_keys() {
        let fv = FeatureVector::new(0.5, 0.25, -0.125);
        let value = serde_json::to_value(fv).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        for name in FeatureName::ALL {
            assert!(obj.contains_key(name.as_str()), "missing key {name}");
        }
    }
}
