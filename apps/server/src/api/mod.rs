//! Route registration.
//!
//! Each route family lives in its own module exposing a `router()`
//! merged here into the application router.

mod convert;
mod currencies;
mod health;
mod rates;
mod root;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root::router())
        .merge(currencies::router())
        .merge(rates::router())
        .merge(convert::router())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
