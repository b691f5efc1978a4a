//! Headless 99 runner.
//!
//! ```text
//! ninety-nine-sim [--config FILE] [--players N] [--ruleset NAME] [--seed S]
//!                 [--games G] [--max-steps M]
//! ```
//!
//! Flags override values loaded from `--config`. Logging is controlled by
//! `RUST_LOG` (default `info`); `RUST_LOG=ninety_nine=debug` shows every
//! transition.

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ninety_nine::core::SessionConfig;
use ninety_nine::rules::RuleSet;
use ninety_nine::sim::{play_many, win_counts, DEFAULT_MAX_STEPS};

const USAGE: &str = "usage: ninety-nine-sim [--config FILE] [--players N] [--ruleset score_race|full_specials|simple] [--seed S] [--games G] [--max-steps M]";

struct Args {
    config: SessionConfig,
    games: u64,
    max_steps: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_ruleset(name: &str) -> Result<RuleSet, String> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| format!("unknown ruleset {name:?}"))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got {value:?}"))
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut config = SessionConfig::default();
    let mut games = 1;
    let mut max_steps = DEFAULT_MAX_STEPS;

    // --config first so the other flags override it.
    if let Some(pos) = raw.iter().position(|a| a == "--config") {
        let path = raw.get(pos + 1).ok_or("--config needs a path")?;
        let json = fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
        config = SessionConfig::from_json(&json).map_err(|e| e.to_string())?;
    }

    let mut iter = raw.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next().ok_or_else(|| format!("{flag} needs a value"))?;
        match flag.as_str() {
            "--config" => {}
            "--players" => config.player_count = parse_number(flag, value)?,
            "--ruleset" => config.ruleset = parse_ruleset(value)?,
            "--seed" => config.seed = parse_number(flag, value)?,
            "--games" => games = parse_number(flag, value)?,
            "--max-steps" => max_steps = parse_number(flag, value)?,
            other => return Err(format!("unknown flag {other}")),
        }
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(Args {
        config,
        games,
        max_steps,
    })
}

fn main() -> ExitCode {
    init_tracing();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let summaries = match play_many(&args.config, args.games, args.max_steps) {
        Ok(summaries) => summaries,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let finished = summaries.iter().filter(|s| s.finished()).count();
    let average_steps = summaries.iter().map(|s| s.steps).sum::<usize>() as f64 / summaries.len().max(1) as f64;
    info!(
        games = summaries.len(),
        finished,
        average_steps,
        ruleset = ?args.config.ruleset,
        "simulation complete"
    );

    for (seat, wins) in win_counts(&summaries, args.config.player_count).iter().enumerate() {
        println!("seat {seat}: {wins} wins");
    }
    ExitCode::SUCCESS
}
