//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondcalc_analytics::prelude::amortization_schedule;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::print_output;

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

#[derive(Serialize, Tabled)]
struct ScheduleDisplay {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Payment Time (years)")]
    payment_time: String,
    #[tabled(rename = "Payment")]
    payment: String,
}

/// Execute the schedule command.
///
/// The schedule never discounts, so it works off the raw terms; no yield
/// resolution is needed.
pub fn execute(args: ScheduleArgs, format: OutputFormat) -> Result<()> {
    let raw = args.bond.to_raw()?;
    let rows = amortization_schedule(&raw);

    let display: Vec<ScheduleDisplay> = rows
        .iter()
        .map(|row| ScheduleDisplay {
            period: row.period,
            payment_time: format!("{:.4}", row.payment_time),
            payment: format!("{:.4}", row.payment),
        })
        .collect();

    if format == OutputFormat::Table {
        crate::output::print_header("Amortization Schedule");
    }
    print_output(&display, format)
}
