//! # Bondcalc Analytics
//!
//! Analytics engine for the bondcalc fixed income calculator.
//!
//! This crate provides every calculation the tool exposes:
//!
//! - **Pricing**: present value of the coupon schedule at an arbitrary
//!   discount rate
//! - **Yields**: yield-to-maturity and break-even solvers, required-yield
//!   resolution, current yield
//! - **Risk**: Macaulay duration, modified duration, convexity
//! - **Reports**: price sensitivity, scenario analysis, frequency
//!   analysis, amortization schedule
//!
//! ## Architecture
//!
//! `bondcalc-analytics` depends on `bondcalc-core` for the term types and
//! `bondcalc-math` for root finding; the core crate stays
//! calculation-free. Functions that discount at the required yield accept
//! only the resolved [`bondcalc_core::BondTerms`]; everything else is
//! written against the [`bondcalc_core::Bond`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use bondcalc_core::BondTermsRaw;
//! use bondcalc_analytics::prelude::*;
//!
//! let raw = BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None)?;
//! let terms = resolve_required_yield(raw)?;
//!
//! let price = present_value(&terms, terms.required_yield())?;
//! let duration = modified_duration(&terms);
//! assert!(price > 0.0 && duration > 0.0);
//! # Ok::<(), bondcalc_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod pricing;
pub mod reports;
pub mod risk;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::present_value;
    pub use crate::reports::{
        amortization_schedule, frequency_analysis, price_sensitivity, scenario_analysis,
        AmortizationRow, FrequencyRow, RiskBasis, ScenarioRow, SensitivityRow,
    };
    pub use crate::risk::{convexity, macaulay_duration, modified_duration};
    pub use crate::yields::{
        break_even_yield, current_yield, resolve_required_yield, solve_ytm, YieldSolution,
    };
}
