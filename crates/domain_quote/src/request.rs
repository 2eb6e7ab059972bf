//! Quote request model
//!
//! The raw, caller-supplied input to the engine. Fields arrive loosely
//! typed on purpose: the validator owns the semantic rules and reports
//! every violation with a stable message, which a typed-only boundary
//! could not do.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tariff::{Deductible, TariffLine};

/// A request for an anonymous private liability insurance quote
///
/// Optional wire fields carry defaults, so callers only send what they
/// deviate on. The request contains no personal data beyond the postal
/// code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// German postal code of the applicant (5 digits)
    pub zip_code: String,
    /// Requested tariff line: basic, comfort, or premium
    pub tariff_line: String,
    /// Whether coverage extends to spouse and children
    #[serde(default)]
    pub family_coverage: bool,
    /// Whether private drone liability is included
    #[serde(default)]
    pub drones_coverage: bool,
    /// Requested deductible in euros (0, 150, 300, or 500)
    #[serde(default)]
    pub deductible_amount: i64,
    /// Whether the applicant held liability insurance before; accepted
    /// but not priced into the premium
    #[serde(default)]
    pub previous_insurance: bool,
    /// Liability claims filed in the last five years
    #[serde(default)]
    pub number_of_claims: i64,
    /// Whether a previous insurer cancelled the applicant's contract
    #[serde(default)]
    pub cancelled_by_insurer: bool,
    /// Requested start of coverage as an ISO-8601 calendar date
    pub effective_date: String,
    /// Coverage sum override in euros; supersedes the tariff default
    /// but never changes the premium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<i64>,
}

impl QuoteRequest {
    /// Returns the tariff line if the raw value names one
    pub fn tariff(&self) -> Option<TariffLine> {
        TariffLine::from_name(&self.tariff_line)
    }

    /// Returns the deductible if the raw amount is an offered option
    pub fn deductible(&self) -> Option<Deductible> {
        Deductible::from_amount(self.deductible_amount)
    }

    /// Returns the effective date if the raw value parses as an ISO date
    pub fn parsed_effective_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.effective_date, "%Y-%m-%d").ok()
    }
}
