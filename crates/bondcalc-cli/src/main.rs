//! Bondcalc CLI - single-bond fixed income analytics.
//!
//! # Usage
//!
//! ```bash
//! # Full metric panel
//! bondcalc analyze --face 1000 --coupon 0.06 --price 950 --years 10
//!
//! # Price at an explicit rate
//! bondcalc price --face 1000 --coupon 0.06 --price 950 --years 10 --rate 0.07
//!
//! # Reports
//! bondcalc sensitivity --face 1000 --coupon 0.05 --price 1000 --years 5 --frequency 1
//! bondcalc scenario --face 1000 --coupon 0.06 --price 950 --years 10 --shifted-risk
//! bondcalc frequency --face 1000 --coupon 0.06 --price 950 --years 10
//! bondcalc schedule --face 1000 --coupon 0.06 --price 950 --years 2
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Analyze(args) => commands::analyze::execute(args, format)?,
        Commands::Sensitivity(args) => commands::sensitivity::execute(args, format)?,
        Commands::Scenario(args) => commands::scenario::execute(args, format)?,
        Commands::Frequency(args) => commands::frequency::execute(args, format)?,
        Commands::Schedule(args) => commands::schedule::execute(args, format)?,
    }

    Ok(())
}
