//! Human-readable quote summaries
//!
//! Builds the one-line narrative shown next to the structured quote.
//! Segment order and wording are fixed; downstream consumers display the
//! line verbatim.

use rust_decimal::Decimal;

use crate::quote::{Extension, Quote};

/// Formats a quote as a single narrative line
///
/// Segments appear in a fixed order, joined with `". "` and closed by a
/// final period:
///
/// ```text
/// Liability Insurance Quote: €15.51/month (€186.12/year). Coverage:
/// €10,000,000 comfort. Deductible: €150. Includes family coverage.
/// Territory: Worldwide. Valid until: 31.08.2025.
/// ```
pub fn format_quote_summary(quote: &Quote) -> String {
    let mut segments = Vec::new();

    segments.push(format!(
        "Liability Insurance Quote: {}/month ({}/year)",
        quote.monthly_premium, quote.annual_premium
    ));

    segments.push(format!(
        "Coverage: €{} {}",
        group_thousands(quote.coverage_sum.amount()),
        quote.tariff_line
    ));

    if quote.deductible > 0 {
        segments.push(format!("Deductible: €{}", quote.deductible));
    } else {
        segments.push("No deductible".to_string());
    }

    if quote.family_coverage {
        segments.push("Includes family coverage".to_string());
    }

    if quote.extensions.contains(&Extension::DronesCoverage) {
        segments.push("Includes drone liability".to_string());
    }

    segments.push(format!("Territory: {}", quote.territory));

    segments.push(format!(
        "Valid until: {}",
        quote.valid_until.format("%d.%m.%Y")
    ));

    format!("{}.", segments.join(". "))
}

/// Groups the integer part of an amount with commas every three digits
fn group_thousands(amount: Decimal) -> String {
    let digits = amount.trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
