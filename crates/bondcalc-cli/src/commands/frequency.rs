//! Frequency command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondcalc_analytics::prelude::frequency_analysis;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::print_output;

/// Arguments for the frequency command.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

#[derive(Serialize, Tabled)]
struct FrequencyDisplay {
    #[tabled(rename = "Payment Frequency")]
    frequency: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Macaulay Duration")]
    macaulay_duration: String,
    #[tabled(rename = "Modified Duration")]
    modified_duration: String,
    #[tabled(rename = "Convexity")]
    convexity: String,
}

/// Execute the frequency command.
pub fn execute(args: FrequencyArgs, format: OutputFormat) -> Result<()> {
    let terms = args.bond.resolve()?;
    let rows = frequency_analysis(&terms)?;

    let display: Vec<FrequencyDisplay> = rows
        .iter()
        .map(|row| FrequencyDisplay {
            frequency: row.label.to_string(),
            price: format!("{:.4}", row.price),
            macaulay_duration: format!("{:.4}", row.macaulay_duration),
            modified_duration: format!("{:.4}", row.modified_duration),
            convexity: format!("{:.4}", row.convexity),
        })
        .collect();

    if format == OutputFormat::Table {
        crate::output::print_header("Frequency Analysis");
    }
    print_output(&display, format)
}
