//! Bisection over monotone decreasing functions.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

// Hard ceiling for the width-stop loop. The interval halves every step,
// so 200 halvings exhaust f64 resolution long before this triggers.
const WIDTH_ITERATION_CAP: u32 = 200;

fn check_interval(lo: f64, hi: f64) -> MathResult<()> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(MathError::InvalidInterval { lo, hi });
    }
    Ok(())
}

fn eval<F>(f: &F, x: f64) -> MathResult<f64>
where
    F: Fn(f64) -> f64,
{
    let fx = f(x);
    if !fx.is_finite() {
        return Err(MathError::NonFiniteEvaluation { x });
    }
    Ok(fx)
}

/// Finds a root of a monotone decreasing function by bisection, stopping
/// when `|f(mid)| < config.tolerance`.
///
/// The update rule relies on monotonicity: a negative residual means the
/// midpoint is past the root, so the upper bound moves down; otherwise the
/// lower bound moves up. If the iteration budget runs out the last
/// midpoint is returned with `converged = false` and a warning is logged.
/// A root outside `[lo, hi]` lands at the nearer boundary.
///
/// # Arguments
///
/// * `f` - Monotone decreasing objective
/// * `lo` - Lower bound of the search interval
/// * `hi` - Upper bound of the search interval
/// * `config` - Tolerance and iteration budget
///
/// # Errors
///
/// Returns an error for a degenerate interval or a non-finite evaluation.
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{bisect_decreasing, SolverConfig};
///
/// // Root of 2 - x on [0, 10]
/// let result = bisect_decreasing(|x| 2.0 - x, 0.0, 10.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-5);
/// assert!(result.converged);
/// ```
pub fn bisect_decreasing<F>(f: F, lo: f64, hi: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    check_interval(lo, hi)?;

    let (mut lo, mut hi) = (lo, hi);
    let mut mid = (lo + hi) / 2.0;
    let mut residual = eval(&f, mid)?;

    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        residual = eval(&f, mid)?;

        if residual.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual,
                converged: true,
            });
        }

        if residual < 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    log::warn!(
        "bisection exhausted {} iterations (residual {:.3e}); returning best estimate",
        config.max_iterations,
        residual
    );

    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual,
        converged: false,
    })
}

/// Finds a root of a monotone decreasing function by bisection, stopping
/// when the search interval width drops to `width` or below.
///
/// Unlike [`bisect_decreasing`] the residual never terminates the search;
/// the interval is halved until it is narrow enough, which bounds the
/// answer to within `width` of the interval's crossing point.
///
/// # Errors
///
/// Returns an error for a degenerate interval, a non-positive or
/// non-finite `width`, or a non-finite evaluation.
pub fn bisect_decreasing_to_width<F>(f: F, lo: f64, hi: f64, width: f64) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    check_interval(lo, hi)?;
    if !width.is_finite() || width <= 0.0 {
        return Err(MathError::InvalidInterval { lo: 0.0, hi: width });
    }

    let (mut lo, mut hi) = (lo, hi);
    let mut mid = (lo + hi) / 2.0;
    let mut residual = eval(&f, mid)?;
    let mut iterations = 0;

    while hi - lo > width && iterations < WIDTH_ITERATION_CAP {
        mid = (lo + hi) / 2.0;
        residual = eval(&f, mid)?;

        if residual < 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }

    Ok(SolverResult {
        root: mid,
        iterations,
        residual,
        converged: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_linear_root() {
        let result =
            bisect_decreasing(|x| 3.0 - x, 0.0, 10.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-5);
        assert!(result.converged);
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_width_stop() {
        let result = bisect_decreasing_to_width(|x| 3.0 - x, 0.0, 10.0, 1e-6).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-5);
        assert!(result.converged);
    }

    #[test]
    fn test_root_above_interval_clamps_to_upper_boundary() {
        // Root at x = 50, interval [0, 1]: every midpoint is too low,
        // the search walks to the upper boundary.
        let result = bisect_decreasing(
            |x| 50.0 - x,
            0.0,
            1.0,
            &SolverConfig::new(1e-9, 100),
        )
        .unwrap();

        assert!(!result.converged);
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_root_below_interval_clamps_to_lower_boundary() {
        let result = bisect_decreasing(
            |x| -5.0 - x,
            0.0,
            1.0,
            &SolverConfig::new(1e-9, 100),
        )
        .unwrap();

        assert!(!result.converged);
        assert_relative_eq!(result.root, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_interval() {
        let result = bisect_decreasing(|x| -x, 1.0, 0.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidInterval { .. })));

        let result = bisect_decreasing_to_width(|x| -x, 0.0, 1.0, -1.0);
        assert!(matches!(result, Err(MathError::InvalidInterval { .. })));
    }

    #[test]
    fn test_non_finite_evaluation() {
        let result = bisect_decreasing(|_| f64::NAN, 0.0, 1.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::NonFiniteEvaluation { .. })));
    }

    #[test]
    fn test_exhausted_budget_returns_estimate() {
        // Two iterations cannot reach 1e-12 on this problem
        let result = bisect_decreasing(
            |x| 3.0 - x,
            0.0,
            10.0,
            &SolverConfig::new(1e-12, 2),
        )
        .unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
        assert!(result.root > 0.0 && result.root < 10.0);
    }

    proptest! {
        #[test]
        fn prop_finds_root_of_shifted_line(root in -50.0f64..50.0) {
            let result = bisect_decreasing(
                |x| root - x,
                -100.0,
                100.0,
                &SolverConfig::new(1e-9, 200),
            ).unwrap();

            prop_assert!((result.root - root).abs() < 1e-6);
        }

        #[test]
        fn prop_width_stop_brackets_root(root in -50.0f64..50.0) {
            let result = bisect_decreasing_to_width(
                |x| root - x,
                -100.0,
                100.0,
                1e-6,
            ).unwrap();

            prop_assert!((result.root - root).abs() < 1e-5);
        }
    }
}
