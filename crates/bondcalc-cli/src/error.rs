//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid coupon rate.
    #[error("Invalid coupon rate: {0}. Pass a fraction between 0 and 1 (e.g. 0.05 for 5%).")]
    InvalidCoupon(f64),

    /// Invalid face value.
    #[error("Invalid face value: {0}. Must be positive.")]
    InvalidFace(f64),

    /// Invalid market price.
    #[error("Invalid market price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Invalid required yield.
    #[error("Invalid required yield: {0}. Pass a rate as a fraction, or -1 to solve it from the market price.")]
    InvalidYield(f64),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
