//! Error types shared by every calculation in the crate

use thiserror::Error;

/// Failures raised by the amortization, currency and fee calculations.
///
/// All errors are local and synchronous: nothing is retried, and no partial
/// result is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    /// Non-positive principal, negative rate, zero term, non-finite amount...
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Currency code outside the supported set
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Account balance does not cover a transfer and its fee
    #[error("insufficient funds: {required:.2} required, {available:.2} available")]
    InsufficientFunds { required: f64, available: f64 },
}

impl FinanceError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FinanceError::invalid("principal must be positive");
        assert_eq!(err.to_string(), "invalid input: principal must be positive");

        let err = FinanceError::UnsupportedCurrency("GBP".to_string());
        assert_eq!(err.to_string(), "unsupported currency: GBP");

        let err = FinanceError::InsufficientFunds { required: 103.0, available: 50.5 };
        assert_eq!(err.to_string(), "insufficient funds: 103.00 required, 50.50 available");
    }
}
