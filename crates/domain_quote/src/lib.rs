//! Liability Quote Domain
//!
//! This crate implements the quote calculation core for an anonymous
//! German private liability product:
//!
//! - **Validation**: seven product rules evaluated on every request, all
//!   violations reported at once with stable messages
//! - **Pricing**: a multiplicative premium model over fixed tariff tables,
//!   computed with exact decimal arithmetic
//! - **Assembly**: fully-populated [`Quote`] values with identifier and
//!   validity stamping
//! - **Summary**: a one-line narrative rendering of a quote
//!
//! The domain is infrastructure-agnostic and fully synchronous; transport
//! concerns live with the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{format_quote_summary, QuoteEngine, QuoteRequest};
//!
//! let engine = QuoteEngine::new();
//! let quote = engine.calculate(&request)?;
//! println!("{}", format_quote_summary(&quote));
//! ```

pub mod engine;
pub mod error;
pub mod quote;
pub mod request;
pub mod summary;
pub mod tariff;
pub mod validation;

pub use engine::QuoteEngine;
pub use error::QuoteError;
pub use quote::{Extension, IncludedRisk, Quote, Territory};
pub use request::QuoteRequest;
pub use summary::format_quote_summary;
pub use tariff::{Deductible, TariffLine};
pub use validation::{validate, ValidationResult};
