//! Error types for bond term construction.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors raised while constructing or resolving bond terms.
///
/// Every arithmetic hazard downstream (division by the payment frequency,
/// discounting at a degenerate rate) is rejected here, before any
/// computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// One or more bond term fields failed validation.
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of what is invalid.
        reason: String,
    },
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_terms("face value must be positive");
        assert!(err.to_string().contains("Invalid bond terms"));
        assert!(err.to_string().contains("face value"));
    }
}
