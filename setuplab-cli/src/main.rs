//! Setuplab CLI — fit the setup outcome model and print decisions.
//!
//! Commands:
//! - `demo` — fit on a synthetic series and decide on its final candle
//! - `buckets` — fit on a synthetic series and list populated buckets
//!
//! Candle ingestion is left to callers of the library; the CLI only drives
//! synthetic series.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use setuplab_core::synthetic::{random_walk, uptrend_with_pullbacks};
use setuplab_core::{
    latest_features, BucketStats, Candle, FeatureVector, FitReport, ModelConfig,
    SetupOutcomeModel, TradeDecision,
};

#[derive(Parser)]
#[command(
    name = "setuplab",
    about = "Setuplab CLI — bucketed next-candle outcome model"
)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit on a synthetic series and decide on its final candle.
    Demo {
        #[command(flatten)]
        data: DataArgs,

        /// Override the config's min_expected_return.
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<f64>,
    },
    /// Fit on a synthetic series and list populated buckets.
    Buckets {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Number of candles to generate.
    #[arg(long, default_value_t = 80)]
    length: usize,

    /// Seed for a random-walk series. Without it, the fixed uptrend-with-pullbacks series is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML model config. Defaults apply to missing keys.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl DataArgs {
    fn candles(&self) -> Vec<Candle> {
        match self.seed {
            Some(seed) => random_walk(seed, self.length),
            None => uptrend_with_pullbacks(self.length),
        }
    }

    fn model_config(&self) -> Result<ModelConfig> {
        match &self.config {
            Some(path) => ModelConfig::load(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(ModelConfig::default()),
        }
    }
}

#[derive(Serialize)]
struct DemoOutput {
    report: FitReport,
    features: FeatureVector,
    decision: TradeDecision,
    reason_text: &'static str,
}

#[derive(Serialize)]
struct BucketsOutput {
    report: FitReport,
    buckets: Vec<BucketStats>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    match cli.command {
        Commands::Demo { data, threshold } => run_demo(&data, threshold),
        Commands::Buckets { data } => run_buckets(&data),
    }
}

fn fit(
    data: &DataArgs,
    config: &ModelConfig,
) -> Result<(SetupOutcomeModel, Vec<Candle>, FitReport)> {
    let candles = data.candles();
    let mut model = SetupOutcomeModel::from_config(config);
    let report = model
        .fit_with_config(&candles, config)
        .with_context(|| format!("fitting on {} candles", candles.len()))?;
    Ok((model, candles, report))
}

fn run_demo(data: &DataArgs, threshold: Option<f64>) -> Result<()> {
    let mut config = data.model_config()?;
    if let Some(t) = threshold {
        if !t.is_finite() {
            bail!("--threshold must be finite");
        }
        config.min_expected_return = t;
    }

    let (model, candles, report) = fit(data, &config)?;

    let Some(features) = latest_features(&candles, config.short_ma, config.long_ma)? else {
        bail!("series too short for features on the final candle");
    };
    let decision = model.decide_with_config(&features, &config)?;
    info!(
        enter = decision.enter,
        predicted_return = decision.predicted_return,
        bucket = %model.bucket_for(&features),
        "decision on final candle"
    );

    let output = DemoOutput {
        report,
        features,
        decision,
        reason_text: decision.reason.message(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_buckets(data: &DataArgs) -> Result<()> {
    let config = data.model_config()?;
    let (model, _, report) = fit(data, &config)?;

    let output = BucketsOutput {
        report,
        buckets: model.bucket_stats(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_args_parse() {
        let cli = Cli::try_parse_from([
            "setuplab", "demo", "--length", "120", "--seed", "7", "--threshold", "-0.001",
        ])
        .unwrap();
        match cli.command {
            Commands::Demo { data, threshold } => {
                assert_eq!(data.length, 120);
                assert_eq!(data.seed, Some(7));
                assert_eq!(threshold, Some(-0.001));
            }
            _ => panic!("expected demo"),
        }
    }

    #[test]
    fn default_data_is_uptrend() {
        let cli = Cli::try_parse_from(["setuplab", "buckets"]).unwrap();
        let Commands::Buckets { data } = cli.command else {
            panic!("expected buckets");
        };
        assert_eq!(data.candles(), uptrend_with_pullbacks(80));
        assert_eq!(data.model_config().unwrap(), ModelConfig::default());
    }

    #[test]
    fn fit_fails_on_short_series() {
        let data = DataArgs {
            length: 10,
            seed: None,
            config: None,
        };
        assert!(fit(&data, &ModelConfig::default()).is_err());
    }
}
