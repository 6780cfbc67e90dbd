//! Root finding for monotone decreasing functions.
//!
//! Bond prices fall as the discount rate rises, which makes bisection the
//! natural solver: no derivative, no bracketing-sign precondition, and a
//! predictable worst case. Two stop rules are provided:
//!
//! - [`bisect_decreasing`]: stop when the residual is within tolerance;
//!   if the iteration budget runs out, return the last midpoint marked
//!   unconverged rather than failing (yield-to-maturity semantics)
//! - [`bisect_decreasing_to_width`]: stop when the search interval has
//!   shrunk below a given width (break-even semantics)
//!
//! A root lying outside the search interval drives the result to the
//! nearer boundary; that is the documented contract, not an error.

mod bisection;

pub use bisection::{bisect_decreasing, bisect_decreasing_to_width};

/// Default residual tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Configuration for the residual-tolerance solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Residual tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root estimate (last midpoint).
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Residual (function value) at the root estimate.
    pub residual: f64,
    /// Whether the stop rule was met. `false` means the estimate is the
    /// best available after exhausting the iteration budget.
    pub converged: bool,
}
