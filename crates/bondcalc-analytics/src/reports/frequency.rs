//! Frequency analysis: the same terms under different coupon frequencies.

use serde::Serialize;

use bondcalc_core::BondTerms;

use crate::error::AnalyticsResult;
use crate::pricing::present_value;
use crate::risk::{convexity, macaulay_duration, modified_duration};

/// Coupon frequencies compared by the report.
const FREQUENCIES: [u32; 3] = [1, 2, 4];

/// One frequency row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// Coupon payments per year.
    pub frequency: u32,
    /// Display label for the frequency.
    pub label: &'static str,
    /// Present value at the original annual required yield.
    pub price: f64,
    /// Macaulay duration under this frequency.
    pub macaulay_duration: f64,
    /// Modified duration under this frequency.
    pub modified_duration: f64,
    /// Convexity under this frequency.
    pub convexity: f64,
}

fn frequency_label(frequency: u32) -> &'static str {
    match frequency {
        1 => "Annual",
        2 => "Semi-Annual",
        4 => "Quarterly",
        _ => "Custom",
    }
}

/// Recomputes price, duration, and convexity with the coupon frequency
/// set to annual, semi-annual, and quarterly in turn.
///
/// The annual required yield is carried over unchanged and reinterpreted
/// under each compounding frequency — a deliberate reproduction of the
/// historical report (the rate is not converted between compounding
/// bases).
///
/// # Errors
///
/// Propagates term validation failures from the frequency override.
pub fn frequency_analysis(terms: &BondTerms) -> AnalyticsResult<Vec<FrequencyRow>> {
    FREQUENCIES
        .iter()
        .map(|&frequency| {
            let variant = terms.with_payment_frequency(frequency)?;
            let price = present_value(&variant, variant.required_yield())?;

            Ok(FrequencyRow {
                frequency,
                label: frequency_label(frequency),
                price,
                macaulay_duration: macaulay_duration(&variant),
                modified_duration: modified_duration(&variant),
                convexity: convexity(&variant),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondcalc_core::BondTermsRaw;

    #[test]
    fn test_rows_and_reference_values() {
        let terms = BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None)
            .unwrap()
            .into_resolved(0.06693902192637324)
            .unwrap();

        let rows = frequency_analysis(&terms).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Annual");
        assert_eq!(rows[1].label, "Semi-Annual");
        assert_eq!(rows[2].label, "Quarterly");

        // Semi-annual row reproduces the bond's own metrics
        assert_relative_eq!(rows[1].price, 950.0, epsilon = 1e-4);
        assert_relative_eq!(rows[1].macaulay_duration, 15.182032, epsilon = 1e-4);

        // Annual: 10 periods; quarterly: 40. Period-indexed durations
        // scale with the period count.
        assert_relative_eq!(rows[0].price, 950.566079, epsilon = 1e-4);
        assert_relative_eq!(rows[0].macaulay_duration, 7.742397, epsilon = 1e-4);
        assert_relative_eq!(rows[2].price, 949.709997, epsilon = 1e-4);
        assert_relative_eq!(rows[2].convexity, 1073.989696, epsilon = 1e-3);
    }
}
