//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The search interval is empty or reversed.
    #[error("Invalid search interval: [{lo}, {hi}]")]
    InvalidInterval {
        /// Lower bound of the interval.
        lo: f64,
        /// Upper bound of the interval.
        hi: f64,
    },

    /// The objective produced a non-finite value.
    #[error("Objective evaluated to a non-finite value at {x}")]
    NonFiniteEvaluation {
        /// The point where evaluation failed.
        x: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::InvalidInterval { lo: 1.0, hi: 0.0 };
        assert!(err.to_string().contains("[1, 0]"));
    }
}
