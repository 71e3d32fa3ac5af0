//! Staff registration and login handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use medika_auth::RegisterStaffInput;
use medika_core::models::staff::Staff;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateStaffRequest {
    pub hospital_id: Uuid,
    pub username: String,
    pub password: String,
}

/// Staff representation returned to clients. Never carries the
/// password hash.
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Staff> for StaffResponse {
    fn from(s: Staff) -> Self {
        Self {
            id: s.id,
            hospital_id: s.hospital_id,
            username: s.username,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub hospital_id: Uuid,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /api/staff/create`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateStaffRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let staff = state
        .auth
        .register(RegisterStaffInput {
            hospital_id: req.hospital_id,
            username: req.username,
            password: req.password,
        })
        .await?;

    tracing::info!(staff_id = %staff.id, hospital_id = %staff.hospital_id, "staff registered");
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(StaffResponse::from(staff)),
    ))
}

/// `POST /api/staff/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state
        .auth
        .login(req.hospital_id, &req.username, &req.password)
        .await?;

    Ok(ApiResponse::success(LoginResponse { token }))
}
