use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::ConvertResponse;

#[derive(serde::Deserialize)]
struct ConvertQuery {
    /// Amount to convert; defaults to 0, which fails validation.
    #[serde(default)]
    amount: f64,
    /// Source currency code (e.g. USD)
    #[serde(default)]
    from: String,
    /// Target currency code (e.g. EUR)
    #[serde(default)]
    to: String,
}

async fn convert(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ConvertQuery>,
) -> ApiResult<Json<ConvertResponse>> {
    let conversion = state
        .rate_service
        .convert(q.amount, &q.from, &q.to)
        .await?;
    Ok(Json(conversion.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", get(convert))
}
