//! Tool interface layer for the liability quote engine
//!
//! The seam between the quote domain and a tool-dispatch host. The host
//! owns the transport: it parses incoming tool-call arguments into a
//! [`QuoteRequest`](domain_quote::QuoteRequest), invokes
//! [`handle_quote_request`], and serializes the returned envelope back
//! onto the wire. The host also installs the `tracing` subscriber; this
//! layer only emits events.
//!
//! Handlers never return errors. Validation failures and unexpected
//! engine failures are both folded into the [`QuoteCalculationResponse`]
//! envelope so the dispatcher always has a well-formed result to send.

pub mod handler;
pub mod response;

pub use handler::{handle_quote_request, handle_quote_request_at};
pub use response::QuoteCalculationResponse;
