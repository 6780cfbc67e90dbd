//! Convexity: second-order price sensitivity to yield.

use bondcalc_core::{Bond, BondTerms};

/// Calculates convexity from the coupon schedule:
///
/// ```text
/// C = ( sum over t of t(t+1) x CF_t / (1 + y/f)^(t+2) ) / market_price
/// ```
///
/// Non-negative for any bond with positive cash flows, since every term
/// of the sum is non-negative.
#[must_use]
pub fn convexity(terms: &BondTerms) -> f64 {
    let base = 1.0 + terms.required_yield() / f64::from(terms.payment_frequency());
    let weighted: f64 = terms
        .cashflows()
        .map(|cf| {
            let t = f64::from(cf.period);
            t * (t + 1.0) * cf.amount / base.powi(cf.period as i32 + 2)
        })
        .sum();
    weighted / terms.market_price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondcalc_core::BondTermsRaw;
    use proptest::prelude::*;

    #[test]
    fn test_convexity_par_bond() {
        let terms = BondTermsRaw::new(1000.0, 0.05, 1000.0, 5, 1, Some(0.05))
            .unwrap()
            .into_resolved(0.05)
            .unwrap();

        // Precomputed for face 1000, 5% annual coupon, 5 periods, y = 5%
        assert_relative_eq!(convexity(&terms), 23.935987, epsilon = 1e-4);
    }

    #[test]
    fn test_convexity_semiannual_discount_bond() {
        let terms = BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None)
            .unwrap()
            .into_resolved(0.06693902192637324)
            .unwrap();

        assert_relative_eq!(convexity(&terms), 269.908923, epsilon = 1e-3);
    }

    proptest! {
        #[test]
        fn prop_convexity_non_negative(
            face in 1.0f64..1e6,
            coupon in 0.0f64..0.3,
            price in 1.0f64..1e6,
            years in 1u32..30,
            freq in 1u32..5,
            rate in 0.0f64..0.5,
        ) {
            let terms = BondTermsRaw::new(face, coupon, price, years, freq, None)
                .unwrap()
                .into_resolved(rate)
                .unwrap();
            prop_assert!(convexity(&terms) >= 0.0);
        }
    }
}
