//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! D_mac = ( sum over t of t x CF_t / (1 + y/f)^t ) / market_price
//! D_mod = D_mac / (1 + y/f)
//! ```
//!
//! where t is the 1-based period index and y the required yield. Two
//! conventions are preserved from the historical calculator: cash flows
//! are weighted by the period index rather than the year fraction, and
//! the divisor is the observed market price rather than the model present
//! value.

use bondcalc_core::{Bond, BondTerms};

/// Calculates Macaulay duration: the discounted-cashflow-weighted average
/// period, per unit of market price.
///
/// Discounts at the bond's required yield, which the [`BondTerms`] type
/// guarantees is resolved.
#[must_use]
pub fn macaulay_duration(terms: &BondTerms) -> f64 {
    let base = 1.0 + terms.required_yield() / f64::from(terms.payment_frequency());
    let weighted: f64 = terms
        .cashflows()
        .map(|cf| f64::from(cf.period) * cf.amount / base.powi(cf.period as i32))
        .sum();
    weighted / terms.market_price()
}

/// Calculates modified duration: Macaulay duration deflated by one
/// period's discounting.
///
/// Approximates the percentage price change per unit change in yield, and
/// is always strictly below the Macaulay figure for positive yields.
#[must_use]
pub fn modified_duration(terms: &BondTerms) -> f64 {
    macaulay_duration(terms) / (1.0 + terms.required_yield() / f64::from(terms.payment_frequency()))
}
