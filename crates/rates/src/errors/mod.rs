//! Error types for mirror fetching and the rate operations.
//!
//! This module provides:
//! - [`FetchError`]: failures of the two-tier mirror fetch
//! - [`RatesError`]: the operation-level taxonomy the HTTP layer maps
//!   onto response codes

use thiserror::Error;

use crate::fetch::Mirror;

/// Failures of a [`RateFetcher`](crate::fetch::RateFetcher) invocation.
///
/// A non-success HTTP status is *not* a `FetchError`: after the fallback
/// hop the fallback's status is passed through to the caller, which
/// classifies it per resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// A mirror attempt exceeded the configured time ceiling.
    #[error("{mirror} mirror timed out")]
    Timeout {
        /// The mirror whose attempt timed out first
        mirror: Mirror,
    },

    /// Network-level failure (DNS, connection refusal) on the last
    /// mirror attempted.
    #[error("{mirror} mirror unreachable: {message}")]
    Transport {
        /// The mirror that failed
        mirror: Mirror,
        /// Transport error description
        message: String,
    },

    /// A mirror answered with a success status but the body was not
    /// valid JSON. Deliberately not masked as unavailability: a decode
    /// failure on the primary does not trigger the fallback hop.
    #[error("{mirror} mirror returned malformed JSON: {message}")]
    Decode {
        /// The mirror that produced the body
        mirror: Mirror,
        /// Parser error description
        message: String,
    },
}

/// Errors produced by [`RateService`](crate::service::RateService)
/// operations.
///
/// Each variant corresponds to one response class of the HTTP façade:
/// `InvalidParameter` and `CurrencyNotFound` map to 400,
/// `UpstreamTimeout` to 408, and `Upstream` to 500.
#[derive(Error, Debug)]
pub enum RatesError {
    /// A required parameter is missing, blank, or out of range.
    /// Caller-correctable; carries an example usage string.
    #[error("{message}")]
    InvalidParameter {
        /// Human-readable validation message
        message: String,
        /// Example request showing correct usage
        example: &'static str,
    },

    /// The upstream resolved but the currency code is absent or
    /// unrecognized.
    #[error("{message}")]
    CurrencyNotFound {
        /// Message echoing the uppercased requested code
        message: String,
    },

    /// Either mirror attempt exceeded the time ceiling.
    #[error("Request timeout. The external API took too long to respond")]
    UpstreamTimeout,

    /// Any other unexpected failure: network refusal, malformed JSON,
    /// unexpected document shape.
    #[error("{context}")]
    Upstream {
        /// Per-operation message, e.g. "Error fetching exchange rates"
        context: &'static str,
        /// Underlying error description, surfaced for diagnostics
        detail: String,
    },
}

impl RatesError {
    /// Classify a fetch failure under the given operation context.
    ///
    /// Timeouts keep their own class; everything else becomes an
    /// `Upstream` error carrying the fetch error's description.
    pub fn from_fetch(context: &'static str, err: FetchError) -> Self {
        match err {
            FetchError::Timeout { .. } => Self::UpstreamTimeout,
            other => Self::Upstream {
                context,
                detail: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_keeps_its_class() {
        let err = RatesError::from_fetch(
            "Error fetching exchange rates",
            FetchError::Timeout {
                mirror: Mirror::Fallback,
            },
        );
        assert!(matches!(err, RatesError::UpstreamTimeout));
    }

    #[test]
    fn transport_failure_becomes_upstream_with_detail() {
        let err = RatesError::from_fetch(
            "Error fetching currencies list",
            FetchError::Transport {
                mirror: Mirror::Fallback,
                message: "connection refused".to_string(),
            },
        );
        match err {
            RatesError::Upstream { context, detail } => {
                assert_eq!(context, "Error fetching currencies list");
                assert!(detail.contains("connection refused"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn decode_failure_becomes_upstream() {
        let err = RatesError::from_fetch(
            "Error performing currency conversion",
            FetchError::Decode {
                mirror: Mirror::Primary,
                message: "expected value at line 1".to_string(),
            },
        );
        assert!(matches!(err, RatesError::Upstream { .. }));
    }

    #[test]
    fn error_display() {
        let err = RatesError::UpstreamTimeout;
        assert_eq!(
            format!("{}", err),
            "Request timeout. The external API took too long to respond"
        );

        let err = FetchError::Timeout {
            mirror: Mirror::Primary,
        };
        assert_eq!(format!("{}", err), "primary mirror timed out");
    }
}
