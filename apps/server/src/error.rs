//! Mapping from the service error taxonomy to HTTP responses.
//!
//! Nothing propagates past the handler boundary as an unhandled fault:
//! every [`RatesError`] converts to exactly one JSON error shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fxbridge_rates::RatesError;

use crate::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Newtype over [`RatesError`] so the response mapping lives here
/// rather than in the core crate.
pub struct ApiError(pub RatesError);

impl From<RatesError> for ApiError {
    fn from(err: RatesError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            RatesError::InvalidParameter { message, example } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(400, message).with_example(example),
            ),
            RatesError::CurrencyNotFound { message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(400, message))
            }
            ref err @ RatesError::UpstreamTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                ErrorResponse::new(408, err.to_string()),
            ),
            RatesError::Upstream { context, detail } => {
                tracing::error!("{}: {}", context, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(500, context).with_error(detail),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
