//! Request validation rules
//!
//! All rules run on every request, in a fixed order, so callers see the
//! complete list of problems at once instead of one per attempt. The
//! messages are part of the external contract and must not drift.

use serde::{Deserialize, Serialize};

use crate::request::QuoteRequest;

const MAX_CLAIMS: i64 = 10;
const MIN_COVERAGE_EUR: i64 = 5_000_000;
const MAX_COVERAGE_EUR: i64 = 20_000_000;

/// Outcome of validating a quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no rule was violated
    pub valid: bool,
    /// One message per violated rule, in rule order
    pub errors: Vec<String>,
}

/// Validates a quote request against the product rules
///
/// Every rule is evaluated; there is no short-circuiting. Failures
/// accumulate in declaration order:
///
/// 1. postal code shape
/// 2. tariff line
/// 3. deductible option
/// 4. claims not negative
/// 5. claims within maximum
/// 6. effective date format
/// 7. coverage override range
pub fn validate(request: &QuoteRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_valid_german_zip(&request.zip_code) {
        errors.push("Invalid German postal code (must be 5 digits)".to_string());
    }

    if request.tariff().is_none() {
        errors.push("Invalid tariff line (must be basic, comfort, or premium)".to_string());
    }

    if request.deductible().is_none() {
        errors.push("Invalid deductible amount (must be 0, 150, 300, or 500)".to_string());
    }

    if request.number_of_claims < 0 {
        errors.push("Number of claims cannot be negative".to_string());
    }

    if request.number_of_claims > MAX_CLAIMS {
        errors.push(format!(
            "Number of claims exceeds maximum allowed ({})",
            MAX_CLAIMS
        ));
    }

    if request.parsed_effective_date().is_none() {
        errors.push("Invalid effective date format".to_string());
    }

    if let Some(amount) = request.coverage_amount {
        if !(MIN_COVERAGE_EUR..=MAX_COVERAGE_EUR).contains(&amount) {
            errors.push(
                "Coverage amount must be between €5,000,000 and €20,000,000".to_string(),
            );
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// German postal codes are exactly five ASCII digits
fn is_valid_german_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
}
