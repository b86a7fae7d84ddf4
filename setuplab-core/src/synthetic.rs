//! Synthetic candle series for demos, tests and benchmarks.
//!
//! These are clearly fake. `uptrend_with_pullbacks` is a fixed shape;
//! `random_walk` is seeded so equal seeds give equal series.

use crate::domain::Candle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rising series: +0.8 per candle, with a -1.2 pullback on every 7th step
/// (including the first). High/low wick 0.5 beyond the body; close floored at 1.0.
pub fn uptrend_with_pullbacks(length: usize) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(length);
    let mut price = 100.0_f64;
    for i in 0..length {
        let drift = if i % 7 == 0 { -1.2 } else { 0.8 };
        let close = (price + drift).max(1.0);
        let high = price.max(close) + 0.5;
        let low = price.min(close) - 0.5;
        candles.push(Candle::new(price, high, low, close).with_volume(1000.0));
        price = close;
    }
    candles
}

/// Random walk from 100.0 with daily returns in ±3% and wicks up to 1%.
pub fn random_walk(seed: u64, length: usize) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut candles = Vec::with_capacity(length);
    let mut price = 100.0_f64;

    for _ in 0..length {
        let step: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + step);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000.0..5_000_000.0);

        candles.push(Candle {
            open,
            high,
            low,
            close,
            volume,
        });
        price = close;
    }

    candles
}
