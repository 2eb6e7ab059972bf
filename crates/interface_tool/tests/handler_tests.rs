//! Tool Handler Tests
//!
//! This module contains tests for the quote calculation handler and the
//! envelope it returns to the tool dispatcher:
//! - Success envelopes carrying the quote and its narrative summary
//! - Validation failure envelopes with the fixed contract strings
//! - JSON wire shape, including camelCase keys and omitted fields
//!
//! # Test Coverage
//!
//! ## Envelope Legs
//! - Success: quote present, error absent
//! - Validation failure: error and summary prefixes, quote absent
//! - Unexpected failure: raw error message and the fixed generic summary
//!
//! ## Wire Shape
//! - camelCase quote keys
//! - Monetary values serialized as exact decimal strings
//! - Absent optional fields omitted entirely
//!
//! # Test Organization
//!
//! - `success_envelope` - Successful calculation tests
//! - `failure_envelopes` - Validation failure tests
//! - `generated_requests` - Property tests over generated valid requests

use domain_quote::QuoteEngine;
use interface_tool::{handle_quote_request, handle_quote_request_at};
use proptest::prelude::*;
use serde_json::json;
use test_utils::{valid_request_strategy, QuoteRequestBuilder, RequestFixtures};

// ============================================================================
// SUCCESS ENVELOPE TESTS
// ============================================================================

mod success_envelope {
    use super::*;

    /// Verifies a valid request produces a success envelope
    #[test]
    fn test_success_leg() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::comfort());

        assert!(response.success);
        assert!(response.quote.is_some(), "Success must carry the quote");
        assert!(response.error.is_none(), "Success must not carry an error");
    }

    /// Verifies the summary narrates the calculated premiums
    #[test]
    fn test_summary_narrates_the_quote() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::family_with_claim());

        assert!(
            response
                .summary
                .starts_with("Liability Insurance Quote: €15.51/month (€186.12/year)."),
            "Unexpected summary: {}",
            response.summary
        );
    }

    /// Verifies the JSON wire shape of a successful response
    #[test]
    fn test_success_json_shape() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::family_with_claim());

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none(), "error key must be omitted");

        // Monetary values travel as exact decimal strings
        let quote = &value["quote"];
        assert_eq!(quote["monthlyPremium"], "15.51");
        assert_eq!(quote["annualPremium"], "186.12");
        assert_eq!(quote["coverageSum"], "10000000");
        assert_eq!(quote["currency"], "EUR");
        assert_eq!(quote["deductible"], 150);
        assert_eq!(quote["tariffLine"], "comfort");
        assert_eq!(quote["territory"], "Worldwide");
        assert_eq!(quote["familyCoverage"], true);
        assert_eq!(quote["extensions"], json!(["family_coverage"]));
        assert_eq!(
            quote["includedRisks"],
            json!(["personal_injury", "property_damage", "financial_loss"])
        );
    }

    /// Verifies identifier and validity fields serialize as strings
    #[test]
    fn test_identifier_and_validity_on_the_wire() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::basic());

        let value = serde_json::to_value(&response).unwrap();
        let quote = &value["quote"];

        let quote_id = quote["quoteId"].as_str().unwrap();
        assert!(
            quote_id.starts_with("Q-"),
            "Quote id {} should carry the Q prefix",
            quote_id
        );
        assert!(quote["validUntil"].is_string());
    }
}

// ============================================================================
// FAILURE ENVELOPE TESTS
// ============================================================================

mod failure_envelopes {
    use super::*;

    /// Verifies the validation leg carries both contract strings
    #[test]
    fn test_validation_leg() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::short_zip());

        assert!(!response.success);
        assert!(response.quote.is_none(), "Failure must not carry a quote");
        assert_eq!(
            response.error.as_deref(),
            Some("Validation error: Invalid German postal code (must be 5 digits)")
        );
        assert_eq!(
            response.summary,
            "Failed to calculate quote: Invalid German postal code (must be 5 digits)"
        );
    }

    /// Verifies multiple violations are comma-joined in both strings
    #[test]
    fn test_multiple_violations_joined() {
        let request = QuoteRequestBuilder::new()
            .with_zip_code("1234")
            .with_tariff_line("gold")
            .build();

        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &request);

        assert_eq!(
            response.error.as_deref(),
            Some(
                "Validation error: Invalid German postal code (must be 5 digits), \
                 Invalid tariff line (must be basic, comfort, or premium)"
            )
        );
        assert_eq!(
            response.summary,
            "Failed to calculate quote: Invalid German postal code (must be 5 digits), \
             Invalid tariff line (must be basic, comfort, or premium)"
        );
    }

    /// Verifies an engine failure that is not a validation rejection gets
    /// the fixed generic summary instead of a rule-message list
    #[test]
    fn test_unexpected_failure_leg() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request_at(
            &engine,
            &RequestFixtures::comfort(),
            chrono::DateTime::<chrono::Utc>::MAX_UTC,
        );

        assert!(!response.success);
        assert!(response.quote.is_none(), "Failure must not carry a quote");
        assert_eq!(
            response.summary,
            "Failed to calculate quote due to an unexpected error"
        );
        let error = response.error.expect("Failure must carry an error");
        assert!(
            error.contains("validity window"),
            "Error should carry the raw engine message, got: {}",
            error
        );
        assert!(
            !error.starts_with("Validation error:"),
            "Unexpected failures must not wear the validation prefix"
        );
    }

    /// Verifies the JSON wire shape of a failed response
    #[test]
    fn test_failure_json_shape() {
        let engine = QuoteEngine::new();
        let response = handle_quote_request(&engine, &RequestFixtures::short_zip());

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert!(value.get("quote").is_none(), "quote key must be omitted");
        assert!(value["error"].is_string());
        assert!(value["summary"].is_string());
    }
}

// ============================================================================
// GENERATED REQUEST PROPERTIES
// ============================================================================

mod generated_requests {
    use super::*;

    proptest! {
        /// Any valid request produces a success envelope
        #[test]
        fn valid_requests_always_succeed(request in valid_request_strategy()) {
            let engine = QuoteEngine::new();
            let response = handle_quote_request(&engine, &request);

            prop_assert!(response.success);
            prop_assert!(response.quote.is_some());
            prop_assert!(response.error.is_none());
        }
    }
}
