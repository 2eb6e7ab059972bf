//! Pre-built Test Fixtures
//!
//! Provides ready-to-use requests for the documented pricing scenarios and
//! common invalid shapes. These fixtures are designed to be consistent and
//! predictable for unit tests.

use domain_quote::QuoteRequest;

use crate::builders::QuoteRequestBuilder;

/// Fixture for raw field values shared across tests
pub struct StringFixtures;

impl StringFixtures {
    /// A valid Berlin postal code
    pub fn zip() -> &'static str {
        "10115"
    }

    /// A postal code with too few digits
    pub fn short_zip() -> &'static str {
        "1234"
    }

    /// A valid ISO effective date
    pub fn effective_date() -> &'static str {
        "2025-09-01"
    }

    /// A German-formatted date the validator must reject
    pub fn german_formatted_date() -> &'static str {
        "01.09.2025"
    }
}

/// Fixture for complete quote requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// Basic tariff, no options: prices at the 5.99 base
    pub fn basic() -> QuoteRequest {
        QuoteRequestBuilder::new().with_tariff_line("basic").build()
    }

    /// Comfort tariff, no options: prices at the 9.99 base
    pub fn comfort() -> QuoteRequest {
        QuoteRequestBuilder::new().build()
    }

    /// Premium tariff, no options: prices at the 14.99 base
    pub fn premium() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_tariff_line("premium")
            .build()
    }

    /// Comfort with family coverage, a 150 euro deductible, and one prior
    /// claim; prices at 15.51 per month
    pub fn family_with_claim() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_family_coverage(true)
            .with_deductible_amount(150)
            .with_number_of_claims(1)
            .build()
    }

    /// Comfort with the drone liability extension; prices at 12.49
    pub fn with_drones() -> QuoteRequest {
        QuoteRequestBuilder::new().with_drones_coverage(true).build()
    }

    /// Comfort with the highest deductible; prices at 7.99
    pub fn high_deductible() -> QuoteRequest {
        QuoteRequestBuilder::new().with_deductible_amount(500).build()
    }

    /// Valid request except for a short postal code
    pub fn short_zip() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_zip_code(StringFixtures::short_zip())
            .build()
    }

    /// Request violating every independently violable rule at once
    ///
    /// Claims are negative here, so the maximum-claims rule stays quiet;
    /// the two claims rules cannot fire together.
    pub fn everything_invalid() -> QuoteRequest {
        QuoteRequestBuilder::new()
            .with_zip_code("abc")
            .with_tariff_line("gold")
            .with_deductible_amount(99)
            .with_number_of_claims(-3)
            .with_effective_date("soon")
            .with_coverage_amount(1_000)
            .build()
    }
}
