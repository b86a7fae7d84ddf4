//! Criterion benchmarks for the fit/predict hot paths.
//!
//! Benchmarks:
//! 1. Moving average over long close series
//! 2. Dataset build (features + labels)
//! 3. Model fit
//! 4. Prediction lookups on a fitted model

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use setuplab_core::features::build_dataset;
use setuplab_core::synthetic::random_walk;
use setuplab_core::{moving_average, FeatureVector, SetupOutcomeModel};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    for n in SIZES {
        let closes: Vec<f64> = random_walk(42, n).iter().map(|c| c.close).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &closes, |b, closes| {
            b.iter(|| moving_average(black_box(closes), 20))
        });
    }
    group.finish();
}

fn bench_build_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_dataset");
    for n in SIZES {
        let candles = random_walk(42, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &candles, |b, candles| {
            b.iter(|| build_dataset(black_box(candles), 5, 20))
        });
    }
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    for n in SIZES {
        let candles = random_walk(42, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &candles, |b, candles| {
            b.iter(|| {
                let mut model = SetupOutcomeModel::default();
                model.fit_default(black_box(candles)).unwrap();
                model
            })
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut model = SetupOutcomeModel::default();
    model.fit_default(&random_walk(42, 10_000)).unwrap();
    let probes: Vec<FeatureVector> = (0..64)
        .map(|i| {
            let x = (i as f64 - 32.0) * 0.002;
            FeatureVector::new(x, -x, x * 0.5)
        })
        .collect();

    c.bench_function("predict_64", |b| {
        b.iter(|| {
            probes
                .iter()
                .map(|f| model.predict_next_return(black_box(f)).unwrap())
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_moving_average,
    bench_build_dataset,
    bench_fit,
    bench_predict
);
criterion_main!(benches);
