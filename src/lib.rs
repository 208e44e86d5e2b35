//! rPresence library root.
//! The time-accounting engine lives in `core`; `cli` is a thin host that
//! loads a dataset and prints what the engine computes.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::{Clock, FixedClock, PresenceCalculator, SystemClock};
use errors::AppResult;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(*force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Day { date } => cli::commands::day::handle(date.as_ref(), ctx),
        Commands::Week { date } => cli::commands::period::handle_week(date.as_ref(), ctx),
        Commands::Month { date } => cli::commands::period::handle_month(date.as_ref(), ctx),
        Commands::Range { start, end } => cli::commands::period::handle_range(start, end, ctx),
        Commands::Overlaps { date } => cli::commands::overlaps::handle(date.as_ref(), ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::enable_logging(cli.log_level.as_deref())?;

    let cfg = Config::load()?;
    let target = cfg.target_ms()?;

    // the clock is read once; every figure of this run shares the same "now"
    let now = match &cli.now {
        Some(s) => utils::date::parse_datetime(s)?,
        None => SystemClock.now(),
    };
    debug!(%now, target, "starting");

    let ctx = Context {
        data_path: utils::path::data_file_path(cli.data.as_deref(), &cfg.data_file),
        json: cli.json,
        calculator: PresenceCalculator::with_target(FixedClock(now), target),
        cfg,
    };

    dispatch(&cli, &ctx)
}
