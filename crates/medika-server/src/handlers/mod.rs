//! Request handlers.

pub mod hospital;
pub mod patient;
pub mod staff;

use axum::Json;
use serde::Serialize;

/// Standard success envelope: `{ "status": "success", "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    status: &'static str,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

/// Liveness probe.
pub async fn health() -> Json<ApiResponse<&'static str>> {
    ApiResponse::success("ok")
}
