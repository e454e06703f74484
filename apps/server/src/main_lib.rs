use std::sync::Arc;

use fxbridge_rates::{HttpTransport, MirrorConfig, RateService};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Shared application state. Handlers hold no mutable state, so a
/// plain `Arc` is all the synchronization needed.
pub struct AppState {
    pub rate_service: Arc<RateService>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let transport = Arc::new(HttpTransport::new(config.request_timeout));
    let mirrors = MirrorConfig {
        primary_base: config.primary_api.clone(),
        fallback_base: config.fallback_api.clone(),
        timeout: config.request_timeout,
    };
    Arc::new(AppState {
        rate_service: Arc::new(RateService::new(mirrors, transport)),
    })
}
