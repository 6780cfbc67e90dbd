//! Present value of the coupon schedule.

use bondcalc_core::Bond;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Sums the discounted coupon schedule. Callers must have checked the
/// rate domain; every rate in the solvers' [0, 1] bracket is valid.
pub(crate) fn pv_unchecked<B: Bond>(bond: &B, rate: f64) -> f64 {
    let base = 1.0 + rate / f64::from(bond.payment_frequency());
    bond.cashflows()
        .map(|cf| cf.amount / base.powi(cf.period as i32))
        .sum()
}

/// Calculates the present value of the bond's cash flows at `rate`.
///
/// The rate is an annual nominal discount rate compounded at the bond's
/// payment frequency:
///
/// ```text
/// PV = sum over t of coupon / (1 + rate/f)^t  +  face / (1 + rate/f)^n
/// ```
///
/// Strictly decreasing in `rate` over the valid domain, which is what the
/// bisection solvers rely on.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] when `rate` is non-finite or
/// at most minus the payment frequency (the discount base would be
/// non-positive).
pub fn present_value<B: Bond>(bond: &B, rate: f64) -> AnalyticsResult<f64> {
    let frequency = f64::from(bond.payment_frequency());
    if !rate.is_finite() || rate <= -frequency {
        return Err(AnalyticsError::InvalidInput(format!(
            "discount rate must be finite and greater than -{frequency}, got {rate}"
        )));
    }
    Ok(pv_unchecked(bond, rate))
}
