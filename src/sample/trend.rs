use crate::config::TrendConfig;
use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;

const BAR_WIDTH: usize = 40;

/// Same ceiling as `trend --days`.
pub const MAX_TREND_DAYS: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendPoint {
    pub day: usize,
    pub acute_load: f64,
    pub chronic_load: f64,
}

/// Randomly generated acute load against a linear chronic baseline.
#[derive(Debug, Clone, Serialize)]
pub struct LoadTrend {
    pub sample: bool,
    pub points: Vec<TrendPoint>,
}

impl LoadTrend {
    pub fn from_config(cfg: &TrendConfig) -> Result<Self> {
        match cfg.seed {
            Some(seed) => Self::generate(cfg, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(cfg, &mut StdRng::from_entropy()),
        }
    }

    pub fn generate<R: Rng>(cfg: &TrendConfig, rng: &mut R) -> Result<Self> {
        check_config(cfg)?;

        let acute = Normal::new(cfg.acute_mean, cfg.acute_std_dev)
            .map_err(|err| anyhow!("invalid acute load distribution: {err}"))?;

        let points = (0..cfg.days)
            .map(|day| TrendPoint {
                day: day + 1,
                acute_load: acute.sample(rng),
                chronic_load: linspace_at(cfg.chronic_start, cfg.chronic_end, cfg.days, day),
            })
            .collect();

        Ok(Self {
            sample: true,
            points,
        })
    }

    pub fn days(&self) -> usize {
        self.points.len()
    }
}

fn check_config(cfg: &TrendConfig) -> Result<()> {
    if !(1..=MAX_TREND_DAYS).contains(&cfg.days) {
        bail!(
            "trend days must be between 1 and {}, got {}",
            MAX_TREND_DAYS,
            cfg.days
        );
    }
    if !cfg.acute_mean.is_finite() {
        bail!("trend acute_mean must be finite, got {}", cfg.acute_mean);
    }
    // Normal::new in rand_distr 0.4 accepts a negative spread.
    if !(cfg.acute_std_dev.is_finite() && cfg.acute_std_dev >= 0.0) {
        bail!(
            "trend acute_std_dev must be finite and non-negative, got {}",
            cfg.acute_std_dev
        );
    }
    if !(cfg.chronic_start.is_finite() && cfg.chronic_end.is_finite()) {
        bail!(
            "trend chronic_start and chronic_end must be finite, got {} and {}",
            cfg.chronic_start,
            cfg.chronic_end
        );
    }
    Ok(())
}

fn linspace_at(start: f64, end: f64, count: usize, index: usize) -> f64 {
    if count <= 1 {
        return start;
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

pub fn print_human(trend: &LoadTrend) {
    println!(
        "Load Trend Context (Last {} Days - {})",
        trend.days(),
        "SAMPLE DATA".yellow().bold()
    );

    let max = trend
        .points
        .iter()
        .flat_map(|point| [point.acute_load, point.chronic_load])
        .fold(0.0_f64, f64::max);

    println!("{:>4} {:>8} {:>8}  acute", "day", "acute", "chronic");
    for point in &trend.points {
        println!(
            "{:>4} {:>8.1} {:>8.1}  {}",
            point.day,
            point.acute_load,
            point.chronic_load,
            bar(point.acute_load, max)
        );
    }

    println!();
    println!("Clubs use these trends to avoid sharp spikes that increase injury likelihood.");
    println!("Values are randomly generated and unrelated to any assessment.");
}
