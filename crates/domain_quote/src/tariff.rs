//! Tariff tables for the private liability product
//!
//! Every pricing factor is a fixed business constant. There are no
//! external rate lookups; a request prices the same way on every node.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied when family coverage is included
pub const FAMILY_COVERAGE_FACTOR: Decimal = dec!(1.5);

/// Flat monthly surcharge in euros for the drone liability extension
pub const DRONES_COVERAGE_SURCHARGE: Decimal = dec!(2.50);

/// Per-claim portion of the claims load (1 + claims * this)
pub const CLAIMS_LOAD_PER_CLAIM: Decimal = dec!(0.15);

/// Multiplier applied when a previous insurer cancelled the applicant
pub const CANCELLATION_LOAD_FACTOR: Decimal = dec!(1.3);

/// Tariff lines offered for private liability coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TariffLine {
    Basic,
    Comfort,
    Premium,
}

impl TariffLine {
    /// Returns the tariff line named by the raw wire value, if any
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(TariffLine::Basic),
            "comfort" => Some(TariffLine::Comfort),
            "premium" => Some(TariffLine::Premium),
            _ => None,
        }
    }

    /// Returns the base monthly premium in euros
    pub fn base_monthly_premium(&self) -> Decimal {
        match self {
            TariffLine::Basic => dec!(5.99),
            TariffLine::Comfort => dec!(9.99),
            TariffLine::Premium => dec!(14.99),
        }
    }

    /// Returns the default coverage sum in euros
    pub fn default_coverage_sum(&self) -> i64 {
        match self {
            TariffLine::Basic => 5_000_000,
            TariffLine::Comfort => 10_000_000,
            TariffLine::Premium => 20_000_000,
        }
    }
}

impl fmt::Display for TariffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TariffLine::Basic => "basic",
            TariffLine::Comfort => "comfort",
            TariffLine::Premium => "premium",
        };
        write!(f, "{}", name)
    }
}

/// Deductible options offered with the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deductible {
    None,
    Eur150,
    Eur300,
    Eur500,
}

impl Deductible {
    /// Returns the deductible matching the requested amount, if offered
    pub fn from_amount(amount: i64) -> Option<Self> {
        match amount {
            0 => Some(Deductible::None),
            150 => Some(Deductible::Eur150),
            300 => Some(Deductible::Eur300),
            500 => Some(Deductible::Eur500),
            _ => None,
        }
    }

    /// Returns the deductible amount in euros
    pub fn amount(&self) -> u32 {
        match self {
            Deductible::None => 0,
            Deductible::Eur150 => 150,
            Deductible::Eur300 => 300,
            Deductible::Eur500 => 500,
        }
    }

    /// Returns the premium factor for carrying this deductible
    ///
    /// Applied unconditionally during pricing; a zero deductible carries
    /// the neutral factor 1.0.
    pub fn discount_factor(&self) -> Decimal {
        match self {
            Deductible::None => dec!(1.0),
            Deductible::Eur150 => dec!(0.9),
            Deductible::Eur300 => dec!(0.85),
            Deductible::Eur500 => dec!(0.8),
        }
    }
}
