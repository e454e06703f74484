use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::main_lib::AppState;
use crate::models::{Attribution, RootResponse, SERVICE_NAME};

/// Static service metadata: the endpoint guide and feature list.
async fn root() -> Json<RootResponse> {
    let endpoints = BTreeMap::from([
        ("/currencies", "Get list of all available currencies"),
        (
            "/convert",
            "Convert currency - Use: /convert?amount=100&from=USD&to=EUR",
        ),
        (
            "/rates",
            "Get all rates for a currency - Use: /rates?currency=USD",
        ),
        ("/health", "Check API health status"),
    ]);

    Json(RootResponse {
        status_code: 200,
        message: SERVICE_NAME,
        attribution: Attribution::default(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
        features: vec![
            "200+ currencies including cryptocurrencies",
            "Real-time exchange rates",
            "No rate limits",
            "Daily updated",
        ],
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root))
}
