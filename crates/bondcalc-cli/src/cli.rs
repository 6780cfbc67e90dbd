//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    AnalyzeArgs, FrequencyArgs, PriceArgs, ScenarioArgs, ScheduleArgs, SensitivityArgs,
};

/// Bondcalc - single-bond fixed income analytics CLI
#[derive(Parser)]
#[command(name = "bondcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price the bond at the resolved required yield or an explicit rate
    Price(PriceArgs),

    /// Full metric panel: price, YTM, durations, convexity, yields
    Analyze(AnalyzeArgs),

    /// Price sensitivity to ±0.5% and ±1% yield shifts
    Sensitivity(SensitivityArgs),

    /// Scenario analysis under ±1% and ±2% yield shifts
    Scenario(ScenarioArgs),

    /// Compare annual, semi-annual, and quarterly coupon frequencies
    Frequency(FrequencyArgs),

    /// Amortization schedule: every payment through redemption
    Schedule(ScheduleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
