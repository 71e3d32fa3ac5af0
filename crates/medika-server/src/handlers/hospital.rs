//! Hospital registration handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use medika_core::error::MedikaError;
use medika_core::models::hospital::{CreateHospital, Hospital};
use medika_core::repository::HospitalRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateHospitalRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HospitalResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hospital> for HospitalResponse {
    fn from(h: Hospital) -> Self {
        Self {
            id: h.id,
            name: h.name,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

/// `POST /api/hospitals`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateHospitalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.name.trim().is_empty() {
        return Err(MedikaError::Validation {
            message: "hospital name must not be empty".into(),
        }
        .into());
    }

    let hospital = state
        .hospitals
        .create(CreateHospital { name: req.name })
        .await?;

    tracing::info!(hospital_id = %hospital.id, "hospital registered");
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(HospitalResponse::from(hospital)),
    ))
}
