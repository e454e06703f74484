//! fxbridge rates crate
//!
//! Fallback-resilient fetching and normalization of currency-rate
//! documents published as static JSON on two upstream mirrors.
//!
//! # Overview
//!
//! The crate supports:
//! - A transport seam ([`MirrorTransport`]) so the HTTP client can be
//!   substituted with a fake in tests
//! - A two-tier fetch policy ([`RateFetcher`]): primary mirror first,
//!   exactly one fallback attempt on failure or non-success status
//! - The three rate operations ([`RateService`]): catalog listing,
//!   per-currency rate tables, and amount conversion
//!
//! # Architecture
//!
//! ```text
//! +--------------+     +--------------+     +------------------+
//! | RateService  | --> | RateFetcher  | --> | MirrorTransport  |
//! +--------------+     +--------------+     +------------------+
//!   validation,          primary-then-        reqwest (prod) or
//!   shaping,             fallback, one        a fake (tests)
//!   conversion           hop only
//! ```
//!
//! # Core Types
//!
//! - [`MirrorConfig`] - the two mirror base URLs and the per-request timeout
//! - [`FetchedDocument`] - resolved status plus parsed JSON body
//! - [`CurrencyCatalog`], [`RateTable`], [`Conversion`] - normalized results
//! - [`FetchError`], [`RatesError`] - failure taxonomy

pub mod errors;
pub mod fetch;
pub mod models;
pub mod service;
pub mod transport;

pub use errors::{FetchError, RatesError};
pub use fetch::{FetchedDocument, Mirror, MirrorConfig, RateFetcher};
pub use models::{format_amount, round2, Conversion, CurrencyCatalog, Money, RateTable};
pub use service::RateService;
pub use transport::{HttpTransport, MirrorResponse, MirrorTransport, TransportError};
