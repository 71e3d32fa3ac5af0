//! HTTP error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use medika_core::error::MedikaError;
use serde_json::json;

/// Error wrapper carrying the domain error across the handler
/// boundary.
///
/// Client-caused failures keep their message; storage and
/// configuration failures are logged here and surfaced as an opaque
/// 500.
#[derive(Debug)]
pub struct ApiError(MedikaError);

impl From<MedikaError> for ApiError {
    fn from(err: MedikaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MedikaError::Validation { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            MedikaError::AuthenticationFailed { reason } => {
                (StatusCode::UNAUTHORIZED, reason.clone())
            }
            MedikaError::AuthorizationDenied { reason } => (StatusCode::FORBIDDEN, reason.clone()),
            MedikaError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            MedikaError::AlreadyExists { .. } => (StatusCode::CONFLICT, self.0.to_string()),
            other => {
                tracing::error!(error = %other, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        };

        (
            status,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response()
    }
}
