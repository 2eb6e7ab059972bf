//! Tool-call handlers
//!
//! Maps engine results onto the response envelope. A handler never
//! fails: every outcome, including unexpected ones, becomes an envelope
//! the dispatcher can return as a completed call.

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use domain_quote::{format_quote_summary, QuoteEngine, QuoteError, QuoteRequest};

use crate::response::QuoteCalculationResponse;

/// Handles a quote calculation tool call
///
/// # Arguments
///
/// * `engine` - The stateless quote engine
/// * `request` - The deserialized tool-call arguments
///
/// # Returns
///
/// The response envelope for the dispatcher to serialize verbatim
pub fn handle_quote_request(
    engine: &QuoteEngine,
    request: &QuoteRequest,
) -> QuoteCalculationResponse {
    handle_quote_request_at(engine, request, Utc::now())
}

/// Handles a quote calculation tool call as of the given instant
///
/// Identifier and validity stamping use `now`, so the envelope is
/// deterministic apart from the random identifier suffix.
pub fn handle_quote_request_at(
    engine: &QuoteEngine,
    request: &QuoteRequest,
    now: DateTime<Utc>,
) -> QuoteCalculationResponse {
    match engine.calculate_at(request, now) {
        Ok(quote) => {
            info!(
                quote_id = %quote.quote_id,
                tariff_line = %quote.tariff_line,
                monthly_premium = %quote.monthly_premium,
                "Quote calculated"
            );
            let summary = format_quote_summary(&quote);
            QuoteCalculationResponse::success(quote, summary)
        }
        Err(QuoteError::Validation(errors)) => {
            warn!(
                rule_violations = errors.len(),
                "Quote request failed validation"
            );
            QuoteCalculationResponse::validation_failure(&errors.join(", "))
        }
        Err(err) => {
            error!(error = %err, "Quote calculation failed unexpectedly");
            QuoteCalculationResponse::unexpected_failure(err.to_string())
        }
    }
}
