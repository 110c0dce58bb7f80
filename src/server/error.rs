use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::RateError;

/// JSON API error: the pipeline failure kind, never its details.
#[derive(Debug)]
pub struct ApiError(pub RateError);

impl From<RateError> for ApiError {
    fn from(e: RateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(kind = self.0.kind(), "Rate pipeline failed: {}", self.0);
        let body = json!({ "error": self.0.kind() });
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}
