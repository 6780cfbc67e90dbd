//! Yield solvers and yield-derived measures.
//!
//! Both solvers search the annual rate bracket [0, 1] (0% to 100%) by
//! bisection over the monotone price function. A true yield outside that
//! bracket comes back clamped at the boundary; that is a documented
//! limitation of the search, not an error.

use bondcalc_core::{Bond, BondTerms, BondTermsRaw};
use bondcalc_math::solvers::{bisect_decreasing, bisect_decreasing_to_width, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::pv_unchecked;

/// Lower bound of the yield search bracket.
const YIELD_BRACKET_LO: f64 = 0.0;
/// Upper bound of the yield search bracket (100% annual).
const YIELD_BRACKET_HI: f64 = 1.0;
/// Interval-width stop for the break-even solver.
const BREAK_EVEN_WIDTH: f64 = 1e-6;

/// A solved yield.
#[derive(Debug, Clone, Copy)]
pub struct YieldSolution {
    /// The solved annual rate (as a decimal, e.g. 0.05 for 5%).
    pub rate: f64,
    /// Number of bisection iterations used.
    pub iterations: u32,
    /// Whether the solver's stop rule was met. `false` marks the rate as
    /// a best-effort estimate (budget exhausted or root at a bracket
    /// boundary).
    pub converged: bool,
}

/// Solves the yield to maturity: the rate at which the present value of
/// the coupon schedule reproduces the market price.
///
/// Stops once the price residual is within `config.tolerance`; if the
/// iteration budget runs out, the last midpoint is returned with
/// `converged = false` rather than an error.
///
/// # Errors
///
/// Only propagates numerical failures from the solver layer (non-finite
/// price evaluations).
pub fn solve_ytm<B: Bond>(bond: &B, config: &SolverConfig) -> AnalyticsResult<YieldSolution> {
    let target = bond.market_price();
    let result = bisect_decreasing(
        |rate| pv_unchecked(bond, rate) - target,
        YIELD_BRACKET_LO,
        YIELD_BRACKET_HI,
        config,
    )?;

    Ok(YieldSolution {
        rate: result.root,
        iterations: result.iterations,
        converged: result.converged,
    })
}

/// Solves the yield that reproduces an arbitrary reference price.
///
/// Same search as [`solve_ytm`] but parameterized on the target price and
/// stopping strictly on interval width (1e-6) instead of the price
/// residual. With the market price as reference this agrees with the
/// yield to maturity to within the interval width.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] for a non-positive or
/// non-finite reference price.
pub fn break_even_yield<B: Bond>(bond: &B, reference_price: f64) -> AnalyticsResult<YieldSolution> {
    if !reference_price.is_finite() || reference_price <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "reference price must be positive, got {reference_price}"
        )));
    }

    let result = bisect_decreasing_to_width(
        |rate| pv_unchecked(bond, rate) - reference_price,
        YIELD_BRACKET_LO,
        YIELD_BRACKET_HI,
        BREAK_EVEN_WIDTH,
    )?;

    Ok(YieldSolution {
        rate: result.root,
        iterations: result.iterations,
        converged: result.converged,
    })
}

/// Resolves raw terms into [`BondTerms`].
///
/// Uses the stated required yield when one was given; otherwise solves
/// the yield to maturity from the market price and resolves with that.
///
/// # Errors
///
/// Propagates term validation and solver failures.
pub fn resolve_required_yield(raw: BondTermsRaw) -> AnalyticsResult<BondTerms> {
    let rate = match raw.stated_yield() {
        Some(rate) => rate,
        None => {
            log::info!("required yield not stated; solving yield to maturity from market price");
            solve_ytm(&raw, &SolverConfig::default())?.rate
        }
    };
    Ok(raw.into_resolved(rate)?)
}

/// Current yield: periodic coupon / market price.
///
/// Kept as the ratio of the *periodic* coupon to price, not annualized by
/// the payment frequency. That matches the historical definition this
/// tool ships with; an annualized figure would be this value times the
/// frequency.
#[must_use]
pub fn current_yield(terms: &BondTerms) -> f64 {
    terms.coupon_payment() / terms.market_price()
}
