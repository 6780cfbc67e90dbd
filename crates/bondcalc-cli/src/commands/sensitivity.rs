//! Sensitivity command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondcalc_analytics::prelude::price_sensitivity;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::print_output;

/// Arguments for the sensitivity command.
#[derive(Args, Debug)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

#[derive(Serialize, Tabled)]
struct SensitivityDisplay {
    #[tabled(rename = "Yield")]
    #[serde(rename = "yield")]
    yield_rate: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Execute the sensitivity command.
pub fn execute(args: SensitivityArgs, format: OutputFormat) -> Result<()> {
    let terms = args.bond.resolve()?;
    let rows = price_sensitivity(&terms)?;

    let display: Vec<SensitivityDisplay> = rows
        .iter()
        .map(|row| SensitivityDisplay {
            yield_rate: format!("{:.4}", row.yield_rate),
            price: format!("{:.4}", row.price),
        })
        .collect();

    if format == OutputFormat::Table {
        crate::output::print_header("Price Sensitivity Analysis");
    }
    print_output(&display, format)
}
