//! Patient search handler.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use medika_core::models::patient::{Patient, PatientSearchCriteria};
use medika_core::repository::PatientRepository;

use super::ApiResponse;
use crate::auth_gate::Authenticated;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/patients/search`
///
/// The request body carries only optional predicates; the hospital
/// scope comes exclusively from the authenticated caller.
pub async fn search(
    State(state): State<AppState>,
    Authenticated(context): Authenticated,
    Json(criteria): Json<PatientSearchCriteria>,
) -> Result<impl IntoResponse, ApiError> {
    let patients: Vec<Patient> = state.patients.search(context.hospital_id, criteria).await?;

    tracing::debug!(
        hospital_id = %context.hospital_id,
        matches = patients.len(),
        "patient search completed"
    );
    Ok(ApiResponse::success(patients))
}
