//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random quote requests that
//! maintain the product rules, plus targeted invalid mutations.

use domain_quote::QuoteRequest;
use proptest::prelude::*;

use crate::builders::QuoteRequestBuilder;

/// Strategy for generating valid German postal codes
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}"
}

/// Strategy for generating postal codes the validator rejects
pub fn invalid_zip_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9]{1,4}",
        "[0-9]{6,8}",
        "[a-z]{5}",
    ]
}

/// Strategy for generating offered tariff line names
pub fn tariff_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("basic".to_string()),
        Just("comfort".to_string()),
        Just("premium".to_string()),
    ]
}

/// Strategy for generating offered deductible amounts
pub fn deductible_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), Just(150i64), Just(300i64), Just(500i64)]
}

/// Strategy for generating claim counts within the accepted range
pub fn claims_strategy() -> impl Strategy<Value = i64> {
    0i64..=10i64
}

/// Strategy for generating coverage overrides within product bounds
pub fn coverage_amount_strategy() -> impl Strategy<Value = Option<i64>> {
    proptest::option::of(5_000_000i64..=20_000_000i64)
}

/// Strategy for generating effective dates in ISO format
///
/// Days stop at 28 so every generated combination is a real calendar date.
pub fn effective_date_strategy() -> impl Strategy<Value = String> {
    (2024i32..2027i32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(year, month, day)| format!("{:04}-{:02}-{:02}", year, month, day))
}

/// Strategy for generating whole requests that pass every validation rule
pub fn valid_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        (
            zip_code_strategy(),
            tariff_line_strategy(),
            any::<bool>(),
            any::<bool>(),
            deductible_strategy(),
        ),
        (
            any::<bool>(),
            claims_strategy(),
            any::<bool>(),
            effective_date_strategy(),
            coverage_amount_strategy(),
        ),
    )
        .prop_map(
            |(
                (zip, tariff, family, drones, deductible),
                (previous, claims, cancelled, date, coverage),
            )| {
                let mut builder = QuoteRequestBuilder::new()
                    .with_zip_code(zip)
                    .with_tariff_line(tariff)
                    .with_family_coverage(family)
                    .with_drones_coverage(drones)
                    .with_deductible_amount(deductible)
                    .with_previous_insurance(previous)
                    .with_number_of_claims(claims)
                    .with_cancelled_by_insurer(cancelled)
                    .with_effective_date(date);
                if let Some(amount) = coverage {
                    builder = builder.with_coverage_amount(amount);
                }
                builder.build()
            },
        )
}
