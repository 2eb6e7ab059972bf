//! Core Kernel - Foundational types for the liability quote engine
//!
//! This crate provides the fundamental building blocks used by the quote
//! domain:
//! - Money types with precise decimal arithmetic
//! - Quote identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency};
pub use identifiers::{QuoteId, QuoteIdError};
