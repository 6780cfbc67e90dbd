//! Core value types.

mod cashflow;
mod terms;

pub use cashflow::{Cashflow, CashflowIter};
pub use terms::{BondTerms, BondTermsRaw};
