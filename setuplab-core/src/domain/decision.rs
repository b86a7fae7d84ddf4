//! Trade decision — the output record of the decision layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed rationale attached to a decision, one per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Prediction strictly above the threshold.
    FavorableHistory,
    /// Prediction at or below the threshold.
    UnfavorableHistory,
}

impl DecisionReason {
    pub fn message(&self) -> &'static str {
        match self {
            DecisionReason::FavorableHistory => {
                "Expected next-candle return of similar past setups is above the threshold."
            }
            DecisionReason::UnfavorableHistory => {
                "Similar setups were often loss-making or low-return; skipping entry."
            }
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Enter/skip verdict for a single setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub enter: bool,
    pub predicted_return: f64,
    pub reason: DecisionReason,
}

impl TradeDecision {
    /// Decide against a threshold. Equality skips.
    pub fn from_prediction(predicted_return: f64, min_expected_return: f64) -> Self {
        if predicted_return > min_expected_return {
            Self {
                enter: true,
                predicted_return,
                reason: DecisionReason::FavorableHistory,
            }
        } else {
            Self {
                enter: false,
                predicted_return,
                reason: DecisionReason::UnfavorableHistory,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_threshold_enters() {
        let d = TradeDecision::from_prediction(0.002, 0.001);
        assert!(d.enter);
        assert_eq!(d.reason, DecisionReason::FavorableHistory);
        assert_eq!(d.predicted_return, 0.002);
    }

    #[test]
    fn equal_to_threshold_skips() {
        let d = TradeDecision::from_prediction(0.001, 0.001);
        assert!(!d.enter);
        assert_eq!(d.reason, DecisionReason::UnfavorableHistory);
    }

    #[test]
    fn nan_prediction_skips() {
        let d = TradeDecision::from_prediction(f64::NAN, 0.0);
        assert!(!d.enter);
    }

    #[test]
    fn reason_messages_are_fixed_per_outcome() {
        let a = TradeDecision::from_prediction(1.0, 0.0);
        let b = TradeDecision::from_prediction(2.0, 0.0);
        assert_eq!(a.reason.to_string(), b.reason.to_string());
        assert_ne!(
            DecisionReason::FavorableHistory.message(),
            DecisionReason::UnfavorableHistory.message()
        );
    }

    #[test]
    fn reason_serializes_snake_case() {
        let json = serde_json::to_string(&DecisionReason::UnfavorableHistory).unwrap();
        assert_eq!(json, "\"unfavorable_history\"");
    }
}
