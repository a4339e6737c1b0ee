use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use relay_core::RelayError;
use thiserror::Error;
use tracing::warn;

/// Request-shape failures on the platform endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(#[from] RelayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejecting request");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
