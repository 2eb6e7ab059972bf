//! Quote domain errors
//!
//! This module defines all error types that can occur while calculating
//! a quote.

use thiserror::Error;

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// One or more validation rules rejected the request
    ///
    /// Carries one message per violated rule, in rule order. The display
    /// form is the comma-joined message list.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// Unexpected failure during calculation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuoteError {
    /// Creates a validation error from collected rule messages
    pub fn validation(errors: Vec<String>) -> Self {
        QuoteError::Validation(errors)
    }

    /// Creates an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        QuoteError::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_joined_messages() {
        let error = QuoteError::validation(vec![
            "Invalid German postal code (must be 5 digits)".to_string(),
            "Invalid effective date format".to_string(),
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid German postal code (must be 5 digits), Invalid effective date format"
        );
    }

    #[test]
    fn test_internal_error_display() {
        let error = QuoteError::internal("quote validity window overflowed");
        assert_eq!(
            error.to_string(),
            "Internal error: quote validity window overflowed"
        );
    }
}
