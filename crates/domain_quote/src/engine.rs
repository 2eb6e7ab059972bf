//! Quote calculation engine
//!
//! Validates a request and runs the pricing pipeline: a base premium per
//! tariff line, adjusted by a fixed sequence of surcharges and discounts,
//! rounded commercially at the end. Apart from identifier and validity
//! stamping the calculation is a pure function of the request.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, QuoteId};

use crate::error::QuoteError;
use crate::quote::{Extension, IncludedRisk, Quote, Territory};
use crate::request::QuoteRequest;
use crate::tariff::{
    CANCELLATION_LOAD_FACTOR, CLAIMS_LOAD_PER_CLAIM, DRONES_COVERAGE_SURCHARGE,
    FAMILY_COVERAGE_FACTOR,
};
use crate::validation::validate;

/// Number of days a quote stays open for acceptance
const QUOTE_VALIDITY_DAYS: i64 = 30;

/// Service that turns validated requests into priced quotes
///
/// The engine holds no state; a single instance can serve any number of
/// calculations, concurrently or not, without coordination.
pub struct QuoteEngine;

impl QuoteEngine {
    /// Creates a new quote engine
    pub fn new() -> Self {
        Self
    }

    /// Calculates a quote for the given request
    ///
    /// Validation runs first; pricing only happens on a clean request.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] with one message per violated
    /// rule when the request fails validation.
    pub fn calculate(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        self.calculate_at(request, Utc::now())
    }

    /// Calculates a quote as of the given instant
    ///
    /// Identifier and validity stamping use `now`, which makes the result
    /// deterministic apart from the random identifier suffix.
    pub fn calculate_at(
        &self,
        request: &QuoteRequest,
        now: DateTime<Utc>,
    ) -> Result<Quote, QuoteError> {
        let validation = validate(request);
        if !validation.valid {
            return Err(QuoteError::validation(validation.errors));
        }

        // Validation guarantees these resolve; a None here is a bug
        let tariff = request
            .tariff()
            .ok_or_else(|| QuoteError::internal("tariff line missing after validation"))?;
        let deductible = request
            .deductible()
            .ok_or_else(|| QuoteError::internal("deductible missing after validation"))?;

        let coverage_sum = Money::from_euros(
            request
                .coverage_amount
                .unwrap_or(tariff.default_coverage_sum()),
        );

        let mut monthly = Money::new(tariff.base_monthly_premium());

        if request.family_coverage {
            monthly = monthly * FAMILY_COVERAGE_FACTOR;
        }

        if request.drones_coverage {
            monthly = monthly + Money::new(DRONES_COVERAGE_SURCHARGE);
        }

        monthly = monthly * deductible.discount_factor();

        if request.number_of_claims > 0 {
            let load = dec!(1) + Decimal::from(request.number_of_claims) * CLAIMS_LOAD_PER_CLAIM;
            monthly = monthly * load;
        }

        if request.cancelled_by_insurer {
            monthly = monthly * CANCELLATION_LOAD_FACTOR;
        }

        // Round the monthly premium once, then annualize from the rounded
        // value so a quoted year is exactly twelve quoted months
        let monthly = monthly.round_commercial();
        let annual = (monthly * dec!(12)).round_commercial();

        let mut extensions = Vec::new();
        if request.drones_coverage {
            extensions.push(Extension::DronesCoverage);
        }
        if request.family_coverage {
            extensions.push(Extension::FamilyCoverage);
        }

        let valid_until = now
            .checked_add_signed(Duration::days(QUOTE_VALIDITY_DAYS))
            .ok_or_else(|| QuoteError::internal("quote validity window overflowed"))?;

        Ok(Quote {
            quote_id: QuoteId::generate(now),
            monthly_premium: monthly,
            annual_premium: annual,
            currency: Currency::Eur,
            coverage_sum,
            deductible: deductible.amount(),
            territory: Territory::Worldwide,
            included_risks: vec![
                IncludedRisk::PersonalInjury,
                IncludedRisk::PropertyDamage,
                IncludedRisk::FinancialLoss,
            ],
            extensions,
            valid_until,
            tariff_line: tariff,
            family_coverage: request.family_coverage,
        })
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}
