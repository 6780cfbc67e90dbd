//! Analyze command implementation.
//!
//! The full metric panel for one bond.

use anyhow::Result;
use clap::Args;

use bondcalc_analytics::prelude::{
    break_even_yield, convexity, current_yield, macaulay_duration, modified_duration,
    present_value, solve_ytm,
};
use bondcalc_core::Bond;
use bondcalc_math::SolverConfig;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let terms = args.bond.resolve()?;

    let price = present_value(&terms, terms.required_yield())?;
    let ytm = solve_ytm(&terms, &SolverConfig::default())?;
    let break_even = break_even_yield(&terms, terms.market_price())?;

    let mut ytm_value = format!("{:.4}", ytm.rate);
    if !ytm.converged {
        // Best estimate after the solver budget; yield may sit outside [0, 1]
        ytm_value.push_str(" (approximate)");
    }

    let results = vec![
        KeyValue::from_rate("Required Yield", terms.required_yield()),
        KeyValue::from_f64("Present Value (Price)", price, 4),
        KeyValue::new("Yield to Maturity", ytm_value),
        KeyValue::from_f64("Macaulay Duration", macaulay_duration(&terms), 4),
        KeyValue::from_f64("Modified Duration", modified_duration(&terms), 4),
        KeyValue::from_f64("Convexity", convexity(&terms), 4),
        KeyValue::from_rate("Current Yield", current_yield(&terms)),
        KeyValue::from_rate("Break-Even Yield", break_even.rate),
    ];

    print_key_values("Bond Analysis", &results, format)
}
