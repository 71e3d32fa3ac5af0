//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Hospital-scoped operations
//! take an explicit `hospital_id` parameter to enforce data
//! isolation; implementations must never widen a query beyond it.

use uuid::Uuid;

use crate::error::MedikaResult;
use crate::models::{
    hospital::{CreateHospital, Hospital},
    patient::{CreatePatient, Patient, PatientSearchCriteria},
    staff::{CreateStaff, Staff},
};

pub trait HospitalRepository: Send + Sync {
    fn create(&self, input: CreateHospital) -> impl Future<Output = MedikaResult<Hospital>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MedikaResult<Hospital>> + Send;
}

/// Credential storage for staff accounts.
pub trait StaffRepository: Send + Sync {
    /// Fails with `AlreadyExists` when `(username, hospital_id)` is
    /// already taken. Timestamps are set by the storage layer.
    fn create(&self, input: CreateStaff) -> impl Future<Output = MedikaResult<Staff>> + Send;
    fn get_by_username(
        &self,
        hospital_id: Uuid,
        username: &str,
    ) -> impl Future<Output = MedikaResult<Staff>> + Send;
    /// Resolve the owning hospital of a staff member.
    fn hospital_of(&self, staff_id: Uuid) -> impl Future<Output = MedikaResult<Uuid>> + Send;
}

pub trait PatientRepository: Send + Sync {
    fn create(&self, input: CreatePatient) -> impl Future<Output = MedikaResult<Patient>> + Send;
    /// Hospital-restricted multi-predicate lookup.
    ///
    /// `hospital_id` is the scope resolved from the authenticated
    /// caller; criteria can only narrow it. No result ordering is
    /// guaranteed, and an empty match is `Ok(vec![])`.
    fn search(
        &self,
        hospital_id: Uuid,
        criteria: PatientSearchCriteria,
    ) -> impl Future<Output = MedikaResult<Vec<Patient>>> + Send;
}
