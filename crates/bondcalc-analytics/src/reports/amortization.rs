//! Amortization schedule: the payment stream period by period.

use serde::Serialize;

use bondcalc_core::Bond;

/// One payment of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based period index.
    pub period: u32,
    /// Payment time in years.
    pub payment_time: f64,
    /// Payment amount; the final row carries coupon plus face value.
    pub payment: f64,
}

/// Lists every scheduled payment from the first coupon through
/// redemption.
///
/// Works on raw or resolved terms; the schedule never discounts.
#[must_use]
pub fn amortization_schedule<B: Bond>(bond: &B) -> Vec<AmortizationRow> {
    bond.cashflows()
        .map(|cf| AmortizationRow {
            period: cf.period,
            payment_time: cf.time_years,
            payment: cf.amount,
        })
        .collect()
}
