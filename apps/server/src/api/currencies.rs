use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::CurrenciesResponse;

/// Full currency catalog with its entry count.
async fn list_currencies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CurrenciesResponse>> {
    let catalog = state.rate_service.list_currencies().await?;
    Ok(Json(catalog.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currencies", get(list_currencies))
}
