//! Two-tier mirror fetching.
//!
//! [`RateFetcher`] resolves a relative resource path against the primary
//! mirror and, on failure or non-success status, against the fallback
//! mirror. One fallback hop only; attempts are strictly sequential,
//! never raced.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;

use crate::errors::FetchError;
use crate::transport::{MirrorTransport, TransportError};

/// Production base URL of the primary mirror.
pub const DEFAULT_PRIMARY_API: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1";

/// Production base URL of the fallback mirror.
pub const DEFAULT_FALLBACK_API: &str = "https://latest.currency-api.pages.dev/v1";

/// Default per-request time ceiling.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which mirror an attempt was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Primary,
    Fallback,
}

impl std::fmt::Display for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mirror::Primary => write!(f, "primary"),
            Mirror::Fallback => write!(f, "fallback"),
        }
    }
}

/// Mirror base URLs and the per-request timeout.
///
/// Injected into the fetcher rather than hardwired, so tests can point
/// at local fixtures.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Base URL tried first for every resource
    pub primary_base: String,
    /// Base URL tried once after a primary failure or bad status
    pub fallback_base: String,
    /// Time ceiling applied to each individual GET
    pub timeout: Duration,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            primary_base: DEFAULT_PRIMARY_API.to_string(),
            fallback_base: DEFAULT_FALLBACK_API.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A resolved document: the mirror's status code and parsed JSON body.
///
/// When the fallback answers with a non-success status the body is
/// parsed best-effort (`Null` if unparseable); callers classify by
/// status per resource.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Status of the mirror response the document came from
    pub status: u16,
    /// Parsed JSON body
    pub body: Value,
}

/// Resolves resource paths against the two mirrors with a fixed policy.
#[derive(Clone)]
pub struct RateFetcher {
    config: MirrorConfig,
    transport: Arc<dyn MirrorTransport>,
}

impl RateFetcher {
    pub fn new(config: MirrorConfig, transport: Arc<dyn MirrorTransport>) -> Self {
        Self { config, transport }
    }

    /// Fetch `path` (e.g. `currencies.json` or `currencies/usd.json`).
    ///
    /// Policy, in order:
    /// 1. GET `primary_base + path`.
    /// 2. Primary 2xx: parse the body. A parse failure is a
    ///    [`FetchError::Decode`] and does not trigger the fallback, so
    ///    upstream bugs are not masked as unavailability.
    /// 3. Primary transport failure or non-2xx status: exactly one GET
    ///    against `fallback_base + path`.
    /// 4. Fallback 2xx: parse (decode failure propagates). Fallback
    ///    non-2xx: pass the status through with a best-effort body.
    /// 5. Fallback transport failure: [`FetchError::Timeout`] if either
    ///    attempt timed out, otherwise [`FetchError::Transport`].
    pub async fn fetch(&self, path: &str) -> Result<FetchedDocument, FetchError> {
        let primary_url = join(&self.config.primary_base, path);
        let primary_timed_out = match self.transport.get(&primary_url).await {
            Ok(resp) if resp.is_success() => {
                return parse_success(resp.status, &resp.body, Mirror::Primary);
            }
            Ok(resp) => {
                debug!(
                    "primary mirror returned status {} for '{}', trying fallback",
                    resp.status, path
                );
                false
            }
            Err(err) => {
                warn!("primary mirror failed for '{}': {}", path, err);
                err == TransportError::Timeout
            }
        };

        let fallback_url = join(&self.config.fallback_base, path);
        match self.transport.get(&fallback_url).await {
            Ok(resp) if resp.is_success() => parse_success(resp.status, &resp.body, Mirror::Fallback),
            Ok(resp) => {
                debug!(
                    "fallback mirror returned status {} for '{}', passing through",
                    resp.status, path
                );
                Ok(FetchedDocument {
                    status: resp.status,
                    body: serde_json::from_str(&resp.body).unwrap_or(Value::Null),
                })
            }
            Err(TransportError::Timeout) => Err(FetchError::Timeout {
                mirror: Mirror::Fallback,
            }),
            Err(TransportError::Other(message)) => {
                if primary_timed_out {
                    Err(FetchError::Timeout {
                        mirror: Mirror::Primary,
                    })
                } else {
                    Err(FetchError::Transport {
                        mirror: Mirror::Fallback,
                        message,
                    })
                }
            }
        }
    }
}

fn parse_success(status: u16, body: &str, mirror: Mirror) -> Result<FetchedDocument, FetchError> {
    let body = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        mirror,
        message: e.to_string(),
    })?;
    Ok(FetchedDocument { status, body })
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}
