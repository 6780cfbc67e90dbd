//! Bond term records.
//!
//! Terms come in two phases. [`BondTermsRaw`] is what a caller can state
//! up front: the required yield may still be unknown. [`BondTerms`] is the
//! resolved record every yield-discounting calculation accepts; its
//! required yield is always present, so "computed duration against an
//! unset yield" cannot be expressed.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

fn validate_common(
    face_value: f64,
    coupon_rate: f64,
    market_price: f64,
    remaining_years: u32,
    payment_frequency: u32,
) -> BondResult<()> {
    if !face_value.is_finite() || face_value <= 0.0 {
        return Err(BondError::invalid_terms(format!(
            "face value must be positive, got {face_value}"
        )));
    }
    if !coupon_rate.is_finite() || coupon_rate < 0.0 {
        return Err(BondError::invalid_terms(format!(
            "coupon rate must be non-negative, got {coupon_rate}"
        )));
    }
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(BondError::invalid_terms(format!(
            "market price must be positive, got {market_price}"
        )));
    }
    if remaining_years == 0 {
        return Err(BondError::invalid_terms(
            "remaining years must be at least 1",
        ));
    }
    if payment_frequency == 0 {
        return Err(BondError::invalid_terms(
            "payment frequency must be at least 1 per year",
        ));
    }
    Ok(())
}

/// Discount factors are (1 + rate/frequency)^t; the rate must keep the
/// base strictly positive.
fn validate_rate(rate: f64, payment_frequency: u32) -> BondResult<()> {
    if !rate.is_finite() || rate <= -f64::from(payment_frequency) {
        return Err(BondError::invalid_terms(format!(
            "required yield must be finite and greater than -{payment_frequency}, got {rate}"
        )));
    }
    Ok(())
}

/// Bond terms as stated by the caller, before the required yield is
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTermsRaw {
    face_value: f64,
    coupon_rate: f64,
    market_price: f64,
    remaining_years: u32,
    payment_frequency: u32,
    required_yield: Option<f64>,
}

impl BondTermsRaw {
    /// Creates validated raw terms.
    ///
    /// # Arguments
    ///
    /// * `face_value` - Redemption amount paid at maturity (> 0)
    /// * `coupon_rate` - Nominal annual coupon rate as a fraction (>= 0)
    /// * `market_price` - Observed trading price (> 0)
    /// * `remaining_years` - Whole years to maturity (>= 1)
    /// * `payment_frequency` - Coupon payments per year (>= 1)
    /// * `required_yield` - Annual nominal discount rate, or `None` to
    ///   have it solved from the market price later
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidTerms`] if any field is out of range.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        market_price: f64,
        remaining_years: u32,
        payment_frequency: u32,
        required_yield: Option<f64>,
    ) -> BondResult<Self> {
        validate_common(
            face_value,
            coupon_rate,
            market_price,
            remaining_years,
            payment_frequency,
        )?;
        if let Some(rate) = required_yield {
            validate_rate(rate, payment_frequency)?;
        }
        Ok(Self {
            face_value,
            coupon_rate,
            market_price,
            remaining_years,
            payment_frequency,
            required_yield,
        })
    }

    /// The stated required yield, if any.
    #[must_use]
    pub fn stated_yield(&self) -> Option<f64> {
        self.required_yield
    }

    /// Finishes construction with a resolved required yield.
    ///
    /// Callers normally go through
    /// `bondcalc_analytics::yields::resolve_required_yield`, which either
    /// takes the stated yield or solves the yield to maturity from the
    /// market price.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidTerms`] if the yield would make the
    /// discount base non-positive.
    pub fn into_resolved(self, required_yield: f64) -> BondResult<BondTerms> {
        validate_rate(required_yield, self.payment_frequency)?;
        Ok(BondTerms {
            face_value: self.face_value,
            coupon_rate: self.coupon_rate,
            market_price: self.market_price,
            remaining_years: self.remaining_years,
            payment_frequency: self.payment_frequency,
            required_yield,
        })
    }
}

/// Fully resolved bond terms: the required yield is always present.
///
/// Immutable once constructed. The only way to obtain one is through
/// [`BondTermsRaw::into_resolved`], so every function taking `&BondTerms`
/// may discount at [`BondTerms::required_yield`] without further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    face_value: f64,
    coupon_rate: f64,
    market_price: f64,
    remaining_years: u32,
    payment_frequency: u32,
    required_yield: f64,
}

impl BondTerms {
    /// Annual nominal discount rate used for duration, convexity, and the
    /// yield-shift reports.
    #[must_use]
    pub fn required_yield(&self) -> f64 {
        self.required_yield
    }

    /// Clones the terms under a different required yield.
    ///
    /// Used by the scenario report's repriced-risk variant, which
    /// re-discounts duration and convexity at each shifted yield.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidTerms`] if the yield would make the
    /// discount base non-positive.
    pub fn with_required_yield(&self, required_yield: f64) -> BondResult<Self> {
        validate_rate(required_yield, self.payment_frequency)?;
        Ok(Self {
            required_yield,
            ..self.clone()
        })
    }

    /// Clones the terms under a different coupon frequency, keeping the
    /// annual required yield as-is.
    ///
    /// Used by the frequency report, which reinterprets the same annual
    /// rate under each compounding frequency.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidTerms`] if `payment_frequency` is zero
    /// or incompatible with the required yield.
    pub fn with_payment_frequency(&self, payment_frequency: u32) -> BondResult<Self> {
        validate_common(
            self.face_value,
            self.coupon_rate,
            self.market_price,
            self.remaining_years,
            payment_frequency,
        )?;
        validate_rate(self.required_yield, payment_frequency)?;
        Ok(Self {
            payment_frequency,
            ..self.clone()
        })
    }
}

macro_rules! impl_bond {
    ($ty:ty) => {
        impl crate::traits::Bond for $ty {
            fn face_value(&self) -> f64 {
                self.face_value
            }

            fn coupon_rate(&self) -> f64 {
                self.coupon_rate
            }

            fn market_price(&self) -> f64 {
                self.market_price
            }

            fn remaining_years(&self) -> u32 {
                self.remaining_years
            }

            fn payment_frequency(&self) -> u32 {
                self.payment_frequency
            }
        }
    };
}

impl_bond!(BondTermsRaw);
impl_bond!(BondTerms);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Bond;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn raw() -> BondTermsRaw {
        BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None).unwrap()
    }

    #[test]
    fn test_valid_terms() {
        let terms = raw();
        assert_relative_eq!(terms.coupon_payment(), 30.0);
        assert_eq!(terms.total_periods(), 20);
        assert_eq!(terms.stated_yield(), None);
    }

    #[test]
    fn test_rejects_non_positive_face() {
        assert!(BondTermsRaw::new(0.0, 0.06, 950.0, 10, 2, None).is_err());
        assert!(BondTermsRaw::new(-100.0, 0.06, 950.0, 10, 2, None).is_err());
    }

    #[test]
    fn test_rejects_negative_coupon_rate() {
        assert!(BondTermsRaw::new(1000.0, -0.01, 950.0, 10, 2, None).is_err());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(BondTermsRaw::new(1000.0, 0.06, 0.0, 10, 2, None).is_err());
    }

    #[test]
    fn test_rejects_zero_years_and_frequency() {
        assert!(BondTermsRaw::new(1000.0, 0.06, 950.0, 0, 2, None).is_err());
        assert!(BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 0, None).is_err());
    }

    #[test]
    fn test_rejects_degenerate_yield() {
        // rate <= -frequency makes the discount base non-positive
        assert!(BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, Some(-2.0)).is_err());
        assert!(BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_resolution() {
        let terms = raw().into_resolved(0.065).unwrap();
        assert_relative_eq!(terms.required_yield(), 0.065);
        assert_eq!(terms.total_periods(), 20);
    }

    #[test]
    fn test_resolution_validates_rate() {
        assert!(raw().into_resolved(-3.0).is_err());
    }

    #[test]
    fn test_with_payment_frequency() {
        let terms = raw().into_resolved(0.065).unwrap();
        let quarterly = terms.with_payment_frequency(4).unwrap();

        assert_eq!(quarterly.payment_frequency(), 4);
        assert_eq!(quarterly.total_periods(), 40);
        assert_relative_eq!(quarterly.coupon_payment(), 15.0);
        assert_relative_eq!(quarterly.required_yield(), 0.065);

        assert!(terms.with_payment_frequency(0).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let terms = raw().into_resolved(0.065).unwrap();
        let json = serde_json::to_string(&terms).unwrap();
        let back: BondTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(terms, back);
    }

    proptest! {
        #[test]
        fn prop_valid_inputs_always_construct(
            face in 1.0f64..1e7,
            coupon in 0.0f64..0.5,
            price in 1.0f64..1e7,
            years in 1u32..50,
            freq in 1u32..12,
        ) {
            let terms = BondTermsRaw::new(face, coupon, price, years, freq, None).unwrap();
            prop_assert_eq!(terms.total_periods(), years * freq);
            prop_assert!(terms.coupon_payment() >= 0.0);
        }
    }
}
