use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::RatesResponse;

#[derive(serde::Deserialize)]
struct RatesQuery {
    /// Base currency code (e.g. USD, EUR, BTC). Missing deserializes
    /// to empty, which the service rejects as a validation failure.
    #[serde(default)]
    currency: String,
}

async fn get_rates(
    State(state): State<Arc<AppState>>,
    Query(q): Query<RatesQuery>,
) -> ApiResult<Json<RatesResponse>> {
    let table = state.rate_service.rates(&q.currency).await?;
    Ok(Json(table.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates", get(get_rates))
}
