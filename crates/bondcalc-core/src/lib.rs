//! # Bondcalc Core
//!
//! Core types for the bondcalc fixed income calculator.
//!
//! This crate provides:
//!
//! - **Terms**: [`BondTermsRaw`] and [`BondTerms`], the two-phase bond
//!   term records (yield optionally unset vs. always resolved)
//! - **Cash flows**: the period-indexed coupon schedule shared by every
//!   discounting calculation
//! - **Traits**: the [`Bond`] seam the analytics functions are written
//!   against
//!
//! ## Two-phase construction
//!
//! Duration, convexity, and the scenario/frequency reports discount at the
//! required yield and are meaningless while it is unset. Rather than carry
//! a sentinel at runtime, the unresolved and resolved states are separate
//! types: analytics that need a yield accept only [`BondTerms`].
//!
//! ```rust
//! use bondcalc_core::BondTermsRaw;
//!
//! let raw = BondTermsRaw::new(1000.0, 0.06, 950.0, 10, 2, None)?;
//! let terms = raw.into_resolved(0.065)?;
//! assert_eq!(terms.required_yield(), 0.065);
//! # Ok::<(), bondcalc_core::BondError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BondError, BondResult};
pub use traits::Bond;
pub use types::{BondTerms, BondTermsRaw, Cashflow};
