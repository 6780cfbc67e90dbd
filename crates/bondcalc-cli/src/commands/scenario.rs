//! Scenario command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondcalc_analytics::prelude::{scenario_analysis, RiskBasis};

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::print_output;

/// Arguments for the scenario command.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Re-discount duration and convexity at each shifted yield instead
    /// of the historical unshifted basis.
    #[arg(long)]
    pub shifted_risk: bool,
}

#[derive(Serialize, Tabled)]
struct ScenarioDisplay {
    #[tabled(rename = "Yield")]
    #[serde(rename = "yield")]
    yield_rate: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Macaulay Duration")]
    macaulay_duration: String,
    #[tabled(rename = "Modified Duration")]
    modified_duration: String,
    #[tabled(rename = "Convexity")]
    convexity: String,
    #[tabled(rename = "Current Yield")]
    current_yield: String,
}

/// Execute the scenario command.
pub fn execute(args: ScenarioArgs, format: OutputFormat) -> Result<()> {
    let terms = args.bond.resolve()?;
    let basis = if args.shifted_risk {
        RiskBasis::Shifted
    } else {
        RiskBasis::Unshifted
    };
    let rows = scenario_analysis(&terms, basis)?;

    let display: Vec<ScenarioDisplay> = rows
        .iter()
        .map(|row| ScenarioDisplay {
            yield_rate: format!("{:.4}", row.yield_rate),
            price: format!("{:.4}", row.price),
            macaulay_duration: format!("{:.4}", row.macaulay_duration),
            modified_duration: format!("{:.4}", row.modified_duration),
            convexity: format!("{:.4}", row.convexity),
            current_yield: format!("{:.4}", row.current_yield),
        })
        .collect();

    if format == OutputFormat::Table {
        crate::output::print_header("Scenario Analysis");
    }
    print_output(&display, format)
}
