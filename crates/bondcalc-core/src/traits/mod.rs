//! The `Bond` trait seam.

use crate::types::CashflowIter;

/// Read access to bond terms plus the derived quantities every
/// calculation starts from.
///
/// Implemented by both [`crate::BondTermsRaw`] and [`crate::BondTerms`]:
/// present value, yield solving, and the amortization schedule never need
/// a resolved required yield, so they are written against this trait
/// rather than against the resolved record.
pub trait Bond {
    /// Redemption amount paid at maturity.
    fn face_value(&self) -> f64;

    /// Nominal annual coupon rate as a fraction (e.g. 0.05).
    fn coupon_rate(&self) -> f64;

    /// Observed trading price.
    fn market_price(&self) -> f64;

    /// Whole years to maturity.
    fn remaining_years(&self) -> u32;

    /// Coupon payments per year.
    fn payment_frequency(&self) -> u32;

    /// Periodic coupon amount: face x coupon rate / frequency.
    fn coupon_payment(&self) -> f64 {
        self.face_value() * self.coupon_rate() / f64::from(self.payment_frequency())
    }

    /// Total number of coupon periods to maturity.
    fn total_periods(&self) -> u32 {
        self.remaining_years() * self.payment_frequency()
    }

    /// The full coupon schedule, period 1 through maturity.
    fn cashflows(&self) -> CashflowIter {
        CashflowIter::new(
            self.total_periods(),
            self.payment_frequency(),
            self.coupon_payment(),
            self.face_value(),
        )
    }
}
