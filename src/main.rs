mod cli;
mod config;
mod core;
mod factors;
mod sample;

use anyhow::Result;
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, InitArgs, TrendArgs};
use sample::trend::LoadTrend;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => run_assess(args),
        Commands::Trend(args) => run_trend(args),
        Commands::Init(args) => run_init(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.output.config.as_deref(), &cwd)?;
    let metrics = args.metrics.apply(loaded.config.player);
    let assessment = core::assess(metrics, &loaded.config, args.notes)?;

    if args.output.json || loaded.config.general.json {
        let json_report = core::report::JsonReport::from(&assessment);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&assessment);
    }

    if assessment.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_trend(args: TrendArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.output.config.as_deref(), &cwd)?;
    let trend_cfg = args.apply(loaded.config.trend.clone());
    let trend = LoadTrend::from_config(&trend_cfg)?;

    if args.output.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&trend)?);
    } else {
        sample::trend::print_human(&trend);
    }

    Ok(0)
}

fn run_init(args: InitArgs) -> Result<i32> {
    let dir = resolve_dir(&std::env::current_dir()?, &args.path);
    let path = dir.join(config::CONFIG_FILE_NAME);
    config::write_default_config(&path)?;
    println!("created {}", path.display());
    Ok(0)
}

fn resolve_dir(cwd: &Path, path: &Path) -> std::path::PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
