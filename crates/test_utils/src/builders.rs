//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_quote::QuoteRequest;

use crate::fixtures::StringFixtures;

/// Builder for constructing quote requests
///
/// Defaults produce a valid comfort-tariff request with no options, which
/// prices at the plain 9.99 base premium.
pub struct QuoteRequestBuilder {
    zip_code: String,
    tariff_line: String,
    family_coverage: bool,
    drones_coverage: bool,
    deductible_amount: i64,
    previous_insurance: bool,
    number_of_claims: i64,
    cancelled_by_insurer: bool,
    effective_date: String,
    coverage_amount: Option<i64>,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            zip_code: StringFixtures::zip().to_string(),
            tariff_line: "comfort".to_string(),
            family_coverage: false,
            drones_coverage: false,
            deductible_amount: 0,
            previous_insurance: false,
            number_of_claims: 0,
            cancelled_by_insurer: false,
            effective_date: StringFixtures::effective_date().to_string(),
            coverage_amount: None,
        }
    }

    /// Sets the postal code
    pub fn with_zip_code(mut self, zip: impl Into<String>) -> Self {
        self.zip_code = zip.into();
        self
    }

    /// Sets the raw tariff line value
    pub fn with_tariff_line(mut self, tariff: impl Into<String>) -> Self {
        self.tariff_line = tariff.into();
        self
    }

    /// Includes or excludes family coverage
    pub fn with_family_coverage(mut self, included: bool) -> Self {
        self.family_coverage = included;
        self
    }

    /// Includes or excludes the drone liability extension
    pub fn with_drones_coverage(mut self, included: bool) -> Self {
        self.drones_coverage = included;
        self
    }

    /// Sets the requested deductible in euros
    pub fn with_deductible_amount(mut self, amount: i64) -> Self {
        self.deductible_amount = amount;
        self
    }

    /// Marks whether the applicant held previous liability insurance
    pub fn with_previous_insurance(mut self, held: bool) -> Self {
        self.previous_insurance = held;
        self
    }

    /// Sets the number of prior claims
    pub fn with_number_of_claims(mut self, claims: i64) -> Self {
        self.number_of_claims = claims;
        self
    }

    /// Marks whether a previous insurer cancelled the applicant
    pub fn with_cancelled_by_insurer(mut self, cancelled: bool) -> Self {
        self.cancelled_by_insurer = cancelled;
        self
    }

    /// Sets the raw effective date value
    pub fn with_effective_date(mut self, date: impl Into<String>) -> Self {
        self.effective_date = date.into();
        self
    }

    /// Sets the coverage sum override in euros
    pub fn with_coverage_amount(mut self, amount: i64) -> Self {
        self.coverage_amount = Some(amount);
        self
    }

    /// Builds the quote request
    pub fn build(self) -> QuoteRequest {
        QuoteRequest {
            zip_code: self.zip_code,
            tariff_line: self.tariff_line,
            family_coverage: self.family_coverage,
            drones_coverage: self.drones_coverage,
            deductible_amount: self.deductible_amount,
            previous_insurance: self.previous_insurance,
            number_of_claims: self.number_of_claims,
            cancelled_by_insurer: self.cancelled_by_insurer,
            effective_date: self.effective_date,
            coverage_amount: self.coverage_amount,
        }
    }
}
