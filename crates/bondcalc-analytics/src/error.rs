//! Error types for analytics calculations.

use thiserror::Error;

use bondcalc_core::BondError;
use bondcalc_math::MathError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// An ad-hoc input (discount rate, reference price) is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid bond terms.
    #[error(transparent)]
    Terms(#[from] BondError),

    /// Numerical failure in the solver layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_error_passes_through() {
        let err: AnalyticsError = BondError::invalid_terms("bad face value").into();
        assert!(err.to_string().contains("bad face value"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = AnalyticsError::InvalidInput("rate must exceed -2".to_string());
        assert!(err.to_string().contains("rate must exceed -2"));
    }
}
