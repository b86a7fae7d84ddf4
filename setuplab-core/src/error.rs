//! Error taxonomy shared by the moving-average engine, dataset builder and model.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A structural precondition is violated (e.g. a zero-length window).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough history to produce a single labeled example.
    #[error("insufficient data: {candles} candles, need more than {required}")]
    InsufficientData { candles: usize, required: usize },

    /// Prediction or decision requested before a successful fit.
    #[error("model is not fitted")]
    NotFitted,
}
