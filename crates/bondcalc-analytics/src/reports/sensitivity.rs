//! Price sensitivity to small yield shifts.

use serde::Serialize;

use bondcalc_core::BondTerms;

use crate::error::AnalyticsResult;
use crate::pricing::present_value;

/// Half-step of the sensitivity grid: 50 basis points.
const YIELD_STEP: f64 = 0.005;

/// One (yield, price) point of the sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityRow {
    /// Shifted annual yield.
    pub yield_rate: f64,
    /// Present value at the shifted yield.
    pub price: f64,
}

/// Reprices the bond at the required yield shifted by -1%, -0.5%, 0,
/// +0.5%, and +1%.
///
/// # Errors
///
/// Fails only if a shifted yield leaves the valid discount-rate domain.
pub fn price_sensitivity(terms: &BondTerms) -> AnalyticsResult<Vec<SensitivityRow>> {
    (-2..=2)
        .map(|k| {
            let yield_rate = terms.required_yield() + f64::from(k) * YIELD_STEP;
            let price = present_value(terms, yield_rate)?;
            Ok(SensitivityRow { yield_rate, price })
        })
        .collect()
}
