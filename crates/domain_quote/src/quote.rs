//! Quote aggregate
//!
//! A quote is fully populated on creation and never mutated afterwards;
//! recalculating always produces a fresh instance with a fresh identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money, QuoteId};

use crate::tariff::TariffLine;

/// Risks included in every tariff line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludedRisk {
    PersonalInjury,
    PropertyDamage,
    FinancialLoss,
}

/// Optional coverage extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    DronesCoverage,
    FamilyCoverage,
}

/// Territorial scope of coverage
///
/// The product insures worldwide; the field exists so the scope travels
/// explicitly with every quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Territory {
    Worldwide,
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Territory::Worldwide => write!(f, "Worldwide"),
        }
    }
}

/// A calculated liability insurance quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique identifier for this quote
    pub quote_id: QuoteId,
    /// Monthly premium, rounded to whole cents
    pub monthly_premium: Money,
    /// Annual premium, twelve times the rounded monthly premium
    pub annual_premium: Money,
    /// Quote currency
    pub currency: Currency,
    /// Maximum amount the insurer pays per claim, in euros
    pub coverage_sum: Money,
    /// Deductible in euros carried by the policyholder per claim
    pub deductible: u32,
    /// Territorial scope of coverage
    pub territory: Territory,
    /// Risks included in every tariff line, in fixed order
    pub included_risks: Vec<IncludedRisk>,
    /// Extensions included in this quote; drones precede family
    pub extensions: Vec<Extension>,
    /// Instant until which the quote can be accepted
    pub valid_until: DateTime<Utc>,
    /// Tariff line the quote was priced on
    pub tariff_line: TariffLine,
    /// Whether family members are covered
    pub family_coverage: bool,
}
