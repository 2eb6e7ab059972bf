//! Strongly-typed identifiers for domain entities
//!
//! Quote identifiers embed their creation instant plus a random suffix, so
//! they sort roughly by time while staying unique without coordination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

const QUOTE_ID_PREFIX: &str = "Q";
const SUFFIX_LEN: usize = 8;

/// Errors that can occur when parsing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteIdError {
    #[error("Invalid quote id format: {0}")]
    InvalidFormat(String),
}

/// Identifier for a calculated quote
///
/// Format: `Q-{unix-millis}-{suffix}` where the suffix is 8 hex characters
/// drawn from a random UUID. Uniqueness is best-effort, which is sufficient
/// for quotes that are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    /// Generates a new identifier stamped with the given creation instant
    pub fn generate(at: DateTime<Utc>) -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}-{}-{}",
            QUOTE_ID_PREFIX,
            at.timestamp_millis(),
            &random[..SUFFIX_LEN]
        ))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the creation instant embedded in the identifier, in unix milliseconds
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.split('-').nth(1)?.parse().ok()
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuoteId {
    type Err = QuoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(QUOTE_ID_PREFIX), Some(millis), Some(suffix))
                if !millis.is_empty()
                    && millis.chars().all(|c| c.is_ascii_digit())
                    && suffix.len() == SUFFIX_LEN
                    && suffix.chars().all(|c| c.is_ascii_hexdigit()) =>
            {
                Ok(Self(s.to_string()))
            }
            _ => Err(QuoteIdError::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_quote_id_shape() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let id = QuoteId::generate(at);

        assert!(id.as_str().starts_with("Q-"));
        assert_eq!(id.as_str().split('-').count(), 3);
    }

    #[test]
    fn test_quote_id_embeds_creation_instant() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let id = QuoteId::generate(at);

        assert_eq!(id.timestamp_millis(), Some(at.timestamp_millis()));
    }

    #[test]
    fn test_quote_ids_are_unique() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let a = QuoteId::generate(at);
        let b = QuoteId::generate(at);

        assert_ne!(a, b, "random suffix must differ between generations");
    }

    #[test]
    fn test_id_parsing_round_trip() {
        let original = QuoteId::generate(Utc::now());
        let parsed: QuoteId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_id_parsing_rejects_malformed_input() {
        assert!("".parse::<QuoteId>().is_err());
        assert!("Q-".parse::<QuoteId>().is_err());
        assert!("X-1717243200000-a1b2c3d4".parse::<QuoteId>().is_err());
        assert!("Q-not-digits".parse::<QuoteId>().is_err());
        assert!("Q-1717243200000-abc".parse::<QuoteId>().is_err());
        assert!("Q-1717243200000-zzzzzzzz".parse::<QuoteId>().is_err());
    }
}
