//! CLI command implementations.

pub mod analyze;
pub mod frequency;
pub mod price;
pub mod scenario;
pub mod schedule;
pub mod sensitivity;

pub use analyze::AnalyzeArgs;
pub use frequency::FrequencyArgs;
pub use price::PriceArgs;
pub use scenario::ScenarioArgs;
pub use schedule::ScheduleArgs;
pub use sensitivity::SensitivityArgs;

use clap::Args;

use bondcalc_analytics::prelude::resolve_required_yield;
use bondcalc_core::{BondTerms, BondTermsRaw};

use crate::error::{CliError, CliResult};

/// The historical "solve the yield for me" sentinel.
const SOLVE_YIELD_SENTINEL: f64 = -1.0;

/// Bond terms shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Face value paid at maturity (e.g. 1000)
    #[arg(long)]
    pub face: f64,

    /// Annual coupon rate as a fraction (e.g. 0.05 for 5%)
    #[arg(long)]
    pub coupon: f64,

    /// Observed market price (e.g. 950)
    #[arg(long)]
    pub price: f64,

    /// Remaining years to maturity
    #[arg(long)]
    pub years: u32,

    /// Coupon payments per year (1=annual, 2=semi-annual, 4=quarterly)
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Required yield as a fraction. Omit (or pass -1) to solve it from
    /// the market price.
    #[arg(long, allow_negative_numbers = true)]
    pub required_yield: Option<f64>,
}

impl BondArgs {
    /// Builds validated raw terms from the arguments.
    pub fn to_raw(&self) -> anyhow::Result<BondTermsRaw> {
        validate_face(self.face)?;
        validate_coupon(self.coupon)?;
        validate_price(self.price)?;
        let required_yield = normalize_required_yield(self.required_yield)?;

        Ok(BondTermsRaw::new(
            self.face,
            self.coupon,
            self.price,
            self.years,
            self.frequency,
            required_yield,
        )?)
    }

    /// Builds resolved terms, solving the yield to maturity when the
    /// required yield was not given.
    pub fn resolve(&self) -> anyhow::Result<BondTerms> {
        Ok(resolve_required_yield(self.to_raw()?)?)
    }
}

/// Maps the historical -1 sentinel to "unset".
fn normalize_required_yield(required_yield: Option<f64>) -> CliResult<Option<f64>> {
    match required_yield {
        None => Ok(None),
        Some(rate) if rate == SOLVE_YIELD_SENTINEL => Ok(None),
        Some(rate) if !rate.is_finite() => Err(CliError::InvalidYield(rate)),
        Some(rate) => Ok(Some(rate)),
    }
}

/// Validates a coupon rate fraction.
fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=1.0).contains(&coupon) {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a face value.
fn validate_face(face: f64) -> CliResult<f64> {
    if !face.is_finite() || face <= 0.0 {
        return Err(CliError::InvalidFace(face));
    }
    Ok(face)
}

/// Validates a market price.
fn validate_price(price: f64) -> CliResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BondArgs {
        BondArgs {
            face: 1000.0,
            coupon: 0.06,
            price: 950.0,
            years: 10,
            frequency: 2,
            required_yield: None,
        }
    }

    #[test]
    fn test_to_raw() {
        assert!(args().to_raw().is_ok());
    }

    #[test]
    fn test_sentinel_means_unset() {
        let mut a = args();
        a.required_yield = Some(-1.0);
        let raw = a.to_raw().unwrap();
        assert_eq!(raw.stated_yield(), None);
    }

    #[test]
    fn test_invalid_coupon_fraction() {
        let mut a = args();
        a.coupon = 6.0; // percentage, not a fraction
        assert!(a.to_raw().is_err());
    }

    #[test]
    fn test_resolve_solves_yield() {
        let terms = args().resolve().unwrap();
        assert!((terms.required_yield() - 0.0669).abs() < 1e-3);
    }
}
