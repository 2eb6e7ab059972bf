//! Response envelopes for tool calls
//!
//! The envelope is the wire contract the tool dispatcher returns to its
//! callers. The failure strings are fixed; downstream consumers match on
//! them verbatim.

use serde::Serialize;

use domain_quote::Quote;

/// Envelope returned for every quote calculation call
///
/// Exactly one of three shapes leaves the handler: success with a quote
/// and narrative summary, a validation failure listing the violated
/// rules, or an unexpected failure with a fixed summary.
#[derive(Debug, Serialize)]
pub struct QuoteCalculationResponse {
    /// Whether a quote was produced
    pub success: bool,
    /// The calculated quote, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    /// Failure description, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable outcome, always present
    pub summary: String,
}

impl QuoteCalculationResponse {
    /// Builds the success envelope for a calculated quote
    pub fn success(quote: Quote, summary: String) -> Self {
        Self {
            success: true,
            quote: Some(quote),
            error: None,
            summary,
        }
    }

    /// Builds the envelope for a request that failed validation
    ///
    /// `joined_errors` is the comma-joined rule message list; it appears
    /// in both the error and the summary, under different prefixes.
    pub fn validation_failure(joined_errors: &str) -> Self {
        Self {
            success: false,
            quote: None,
            error: Some(format!("Validation error: {}", joined_errors)),
            summary: format!("Failed to calculate quote: {}", joined_errors),
        }
    }

    /// Builds the envelope for an unexpected calculation failure
    pub fn unexpected_failure(message: String) -> Self {
        Self {
            success: false,
            quote: None,
            error: Some(message),
            summary: "Failed to calculate quote due to an unexpected error".to_string(),
        }
    }
}
