//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of euro amounts using
//! rust_decimal for precise calculations without floating-point errors.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Currency codes following ISO 4217
///
/// The quote engine prices exclusively in euros; the enum exists so the
/// currency travels explicitly on the wire instead of by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount in euros
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts carry full precision through intermediate calculations;
/// rounding to cents happens exactly once, via [`Money::round_commercial`],
/// when a premium is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from a whole number of euros (e.g., coverage sums)
    pub fn from_euros(euros: i64) -> Self {
        Self(Decimal::new(euros, 0))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// Multiplies by a scalar (e.g., for surcharge and discount factors)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Rounds to whole cents using commercial rounding (round half away from zero)
    pub fn round_commercial(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", Currency::Eur.symbol(), self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}
