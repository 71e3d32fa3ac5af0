//! Hospital domain model.
//!
//! A hospital is the tenancy unit of the system: all staff and
//! patient records are scoped to exactly one hospital.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An isolated hospital organization.
///
/// The id is immutable once assigned. Names are display values and
/// are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to register a new hospital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHospital {
    pub name: String,
}
