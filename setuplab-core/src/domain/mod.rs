//! Domain types for setuplab

pub mod candle;
pub mod decision;

pub use candle::Candle;
pub use decision::{DecisionReason, TradeDecision};
