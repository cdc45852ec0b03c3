use crate::config::TrendConfig;
use crate::core::metrics::PlayerMetrics;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "loadguard",
    version,
    about = "Daily soft-tissue injury risk from load and wellness monitoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one player-day and explain the result.
    Assess(AssessArgs),
    /// Print an illustrative acute/chronic load trend built from random sample data.
    Trend(TrendArgs),
    /// Write a default loadguard.toml.
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    #[command(flatten)]
    pub metrics: MetricArgs,
    /// Free-text staff notes carried into the report. Not scored.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Per-run overrides for the `[player]` section of the config.
#[derive(Debug, Args, Clone, Default)]
pub struct MetricArgs {
    /// Acute:chronic workload ratio (0.5 - 3.0)
    #[arg(long, allow_negative_numbers = true)]
    pub acwr: Option<f64>,
    /// Fatigue z-score (-3.0 - 3.0)
    #[arg(long, allow_negative_numbers = true)]
    pub fatigue_z: Option<f64>,
    /// Muscle soreness z-score (-3.0 - 3.0)
    #[arg(long, allow_negative_numbers = true)]
    pub soreness_z: Option<f64>,
    /// High-speed running distance in metres (0 - 3000)
    #[arg(long, allow_negative_numbers = true)]
    pub high_speed_distance: Option<i64>,
    /// Acceleration count (0 - 150)
    #[arg(long, allow_negative_numbers = true)]
    pub accelerations: Option<i64>,
    /// Deceleration count (0 - 150)
    #[arg(long, allow_negative_numbers = true)]
    pub decelerations: Option<i64>,
}

impl MetricArgs {
    pub fn apply(&self, base: PlayerMetrics) -> PlayerMetrics {
        PlayerMetrics {
            acwr: self.acwr.unwrap_or(base.acwr),
            fatigue_z: self.fatigue_z.unwrap_or(base.fatigue_z),
            soreness_z: self.soreness_z.unwrap_or(base.soreness_z),
            high_speed_distance: self.high_speed_distance.unwrap_or(base.high_speed_distance),
            accelerations: self.accelerations.unwrap_or(base.accelerations),
            decelerations: self.decelerations.unwrap_or(base.decelerations),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct TrendArgs {
    #[command(flatten)]
    pub output: OutputArgs,
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub days: Option<u16>,
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TrendArgs {
    pub fn apply(&self, base: TrendConfig) -> TrendConfig {
        TrendConfig {
            days: self.days.map(usize::from).unwrap_or(base.days),
            seed: self.seed.or(base.seed),
            ..base
        }
    }
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to write loadguard.toml into.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}
