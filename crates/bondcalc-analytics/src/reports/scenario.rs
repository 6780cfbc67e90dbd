//! Scenario analysis under parallel yield shifts.

use serde::Serialize;

use bondcalc_core::BondTerms;

use crate::error::AnalyticsResult;
use crate::pricing::present_value;
use crate::risk::{convexity, macaulay_duration, modified_duration};
use crate::yields::current_yield;

/// Parallel yield shifts evaluated by the scenario report.
const SCENARIO_DELTAS: [f64; 5] = [-0.02, -0.01, 0.0, 0.01, 0.02];

/// Which yield the risk measures are discounted at.
///
/// The historical calculator repriced only the price under each shifted
/// yield and left duration, convexity, and current yield at the unshifted
/// required yield. [`RiskBasis::Unshifted`] reproduces that;
/// [`RiskBasis::Shifted`] is the corrected variant that re-discounts the
/// risk measures per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskBasis {
    /// Duration/convexity at the original required yield (compatible with
    /// the historical output).
    #[default]
    Unshifted,
    /// Duration/convexity re-discounted at each scenario's shifted yield.
    Shifted,
}

/// One scenario row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioRow {
    /// Shifted annual yield for this scenario.
    pub yield_rate: f64,
    /// Present value at the shifted yield.
    pub price: f64,
    /// Macaulay duration (basis per [`RiskBasis`]).
    pub macaulay_duration: f64,
    /// Modified duration (basis per [`RiskBasis`]).
    pub modified_duration: f64,
    /// Convexity (basis per [`RiskBasis`]).
    pub convexity: f64,
    /// Current yield; a pure price ratio, identical across scenarios.
    pub current_yield: f64,
}

/// Evaluates the bond under parallel yield shifts of -2%, -1%, 0, +1%,
/// and +2%.
///
/// # Errors
///
/// Fails if a shifted yield leaves the valid discount-rate domain.
pub fn scenario_analysis(terms: &BondTerms, basis: RiskBasis) -> AnalyticsResult<Vec<ScenarioRow>> {
    SCENARIO_DELTAS
        .iter()
        .map(|delta| {
            let yield_rate = terms.required_yield() + delta;
            let price = present_value(terms, yield_rate)?;

            let shifted;
            let risk_terms = match basis {
                RiskBasis::Unshifted => terms,
                RiskBasis::Shifted => {
                    shifted = terms.with_required_yield(yield_rate)?;
                    &shifted
                }
            };

            Ok(ScenarioRow {
                yield_rate,
                price,
                macaulay_duration: macaulay_duration(risk_terms),
                modified_duration: modified_duration(risk_terms),
                convexity: convexity(risk_terms),
                current_yield: current_yield(terms),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondcalc_core::BondTermsRaw;

    fn terms() -> BondTerms {
        BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None)
            .unwrap()
            .into_resolved(0.06693902192637324)
            .unwrap()
    }

    #[test]
    fn test_unshifted_risk_is_constant_across_scenarios() {
        let rows = scenario_analysis(&terms(), RiskBasis::Unshifted).unwrap();

        assert_eq!(rows.len(), 5);
        assert_relative_eq!(rows[0].yield_rate, 0.06693902192637324 - 0.02, epsilon = 1e-12);

        // Price varies, risk measures do not
        assert!(rows[0].price > rows[4].price);
        for row in &rows {
            assert_relative_eq!(row.macaulay_duration, rows[2].macaulay_duration, epsilon = 1e-12);
            assert_relative_eq!(row.convexity, rows[2].convexity, epsilon = 1e-12);
            assert_relative_eq!(row.current_yield, 30.0 / 950.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_shifted_risk_varies_with_yield() {
        let rows = scenario_analysis(&terms(), RiskBasis::Shifted).unwrap();

        // Higher discount rate shortens duration
        assert!(rows[0].macaulay_duration > rows[4].macaulay_duration);
        assert!(rows[0].convexity > rows[4].convexity);

        // Center scenario matches the unshifted basis
        let unshifted = scenario_analysis(&terms(), RiskBasis::Unshifted).unwrap();
        assert_relative_eq!(
            rows[2].macaulay_duration,
            unshifted[2].macaulay_duration,
            epsilon = 1e-12
        );
    }
}
