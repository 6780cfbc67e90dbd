//! Price command implementation.

use anyhow::Result;
use clap::Args;

use bondcalc_analytics::prelude::present_value;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Discount rate to price at. Defaults to the resolved required yield.
    #[arg(long)]
    pub rate: Option<f64>,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let terms = args.bond.resolve()?;
    let rate = args.rate.unwrap_or_else(|| terms.required_yield());
    let price = present_value(&terms, rate)?;

    let results = vec![
        KeyValue::from_rate("Discount Rate", rate),
        KeyValue::from_f64("Present Value", price, 4),
    ];

    print_key_values("Bond Price", &results, format)
}
