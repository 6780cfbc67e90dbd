//! Report generators: derived views over pricing, yields, and risk.
//!
//! Each report is a pure function producing a finite sequence of
//! serializable row records; nothing feeds back into the bond terms.

mod amortization;
mod frequency;
mod scenario;
mod sensitivity;

pub use amortization::{amortization_schedule, AmortizationRow};
pub use frequency::{frequency_analysis, FrequencyRow};
pub use scenario::{scenario_analysis, RiskBasis, ScenarioRow};
pub use sensitivity::{price_sensitivity, SensitivityRow};
