use std::time::Duration;

use fxbridge_rates::fetch::{DEFAULT_FALLBACK_API, DEFAULT_PRIMARY_API, DEFAULT_TIMEOUT};

/// Server configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub listen_addr: String,
    /// Base URL of the primary mirror
    pub primary_api: String,
    /// Base URL of the fallback mirror
    pub fallback_api: String,
    /// Per-request time ceiling for upstream GETs
    pub request_timeout: Duration,
}

impl Config {
    /// Read configuration from environment variables, falling back to
    /// production defaults.
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("FX_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let primary_api =
            std::env::var("FX_PRIMARY_API").unwrap_or_else(|_| DEFAULT_PRIMARY_API.to_string());
        let fallback_api =
            std::env::var("FX_FALLBACK_API").unwrap_or_else(|_| DEFAULT_FALLBACK_API.to_string());
        let request_timeout = std::env::var("FX_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            listen_addr,
            primary_api,
            fallback_api,
            request_timeout,
        }
    }
}
