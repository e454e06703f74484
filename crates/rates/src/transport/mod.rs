//! Transport seam between the fetcher and the actual HTTP client.
//!
//! The fetch policy is written against [`MirrorTransport`] rather than
//! any particular client library, so tests can point the fetcher at a
//! fake transport serving local fixtures.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

/// A raw mirror response: the HTTP status and the body text.
///
/// The body is kept unparsed here; JSON decoding (and its failure
/// classification) is the fetcher's concern.
#[derive(Debug, Clone)]
pub struct MirrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl MirrorResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded the client's time ceiling.
    Timeout,
    /// Any other network failure (DNS, connection refused, reset).
    Other(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Issues a single GET against an absolute URL.
///
/// Implement this to substitute the HTTP client. The production
/// implementation is [`HttpTransport`]; tests use recording fakes.
#[async_trait]
pub trait MirrorTransport: Send + Sync {
    /// Fetch the document at `url`, returning status and body text.
    async fn get(&self, url: &str) -> Result<MirrorResponse, TransportError>;
}

/// reqwest-backed transport with a fixed per-request timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose requests are capped at `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

#[async_trait]
impl MirrorTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<MirrorResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(MirrorResponse { status, body })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Other(err.to_string())
    }
}
