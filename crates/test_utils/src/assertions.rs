//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::QuoteId;
use domain_quote::{Quote, ValidationResult};
use rust_decimal_macros::dec;

/// Asserts the invariants every calculated quote must satisfy
///
/// # Panics
///
/// Panics if the monthly premium is negative, the annual premium is not
/// twelve rounded monthly premiums, the standing risk list is incomplete,
/// or the identifier does not parse back.
pub fn assert_valid_quote(quote: &Quote) {
    assert!(
        !quote.monthly_premium.is_negative(),
        "Monthly premium must not be negative, got {}",
        quote.monthly_premium
    );

    assert_eq!(
        quote.annual_premium.amount(),
        (quote.monthly_premium * dec!(12)).amount(),
        "Annual premium must equal twelve rounded monthly premiums"
    );

    assert_eq!(
        quote.included_risks.len(),
        3,
        "Every quote carries the three standing risks"
    );

    assert!(
        quote.quote_id.as_str().parse::<QuoteId>().is_ok(),
        "Quote id {} does not match the expected shape",
        quote.quote_id
    );
}

/// Asserts that validation failed and reported the given message
pub fn assert_validation_failed_with(result: &ValidationResult, message: &str) {
    assert!(
        !result.valid,
        "Expected validation to fail, but it passed"
    );
    assert!(
        result.errors.iter().any(|e| e == message),
        "Expected message {:?} among errors {:?}",
        message,
        result.errors
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::RequestFixtures;
    use domain_quote::{validation::validate, QuoteEngine};

    #[test]
    fn test_assert_valid_quote_accepts_engine_output() {
        let engine = QuoteEngine::new();
        let quote = engine.calculate(&RequestFixtures::comfort()).unwrap();

        assert_valid_quote(&quote);
    }

    #[test]
    fn test_assert_validation_failed_with_matches_message() {
        let result = validate(&RequestFixtures::short_zip());

        assert_validation_failed_with(
            &result,
            "Invalid German postal code (must be 5 digits)",
        );
    }

    #[test]
    #[should_panic(expected = "Expected validation to fail")]
    fn test_assert_validation_failed_with_panics_on_valid_input() {
        let result = validate(&RequestFixtures::comfort());
        assert_validation_failed_with(&result, "anything");
    }

    #[test]
    fn test_assert_ok_unwraps_value() {
        let result: Result<i32, String> = Ok(7);
        assert_eq!(assert_ok!(result), 7);
    }

    #[test]
    fn test_assert_err_unwraps_error() {
        let result: Result<i32, String> = Err("boom".to_string());
        assert_eq!(assert_err!(result), "boom");
    }

    #[test]
    #[should_panic(expected = "Expected Err")]
    fn test_assert_err_panics_on_ok() {
        let result: Result<i32, String> = Ok(7);
        let _ = assert_err!(result);
    }
}
