//! Staff domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member of a single hospital.
///
/// Usernames are unique within a hospital, not globally. The password
/// is stored only as an Argon2id hash; the owning hospital id is
/// required and immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new staff member.
///
/// Carries the already-computed password hash — plaintext passwords
/// never reach the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaff {
    pub hospital_id: Uuid,
    pub username: String,
    pub password_hash: String,
}
