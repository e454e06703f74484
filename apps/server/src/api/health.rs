use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};

use crate::main_lib::AppState;
use crate::models::{Attribution, HealthResponse, SERVICE_NAME};

/// Static health payload. Makes no upstream call and cannot fail.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        attribution: Attribution::default(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}
