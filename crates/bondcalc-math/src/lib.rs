//! # Bondcalc Math
//!
//! Numerical utilities for the bondcalc fixed income calculator.
//!
//! The calculator's only nontrivial numerics is root finding over a
//! monotone decreasing function (a bond price as a function of its
//! discount rate), so this crate provides exactly that: bisection with a
//! residual-tolerance stop and bisection with an interval-width stop.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{
    bisect_decreasing, bisect_decreasing_to_width, SolverConfig, SolverResult,
};
