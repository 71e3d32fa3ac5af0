//! SurrealDB implementation of [`StaffRepository`] — the credential
//! store.
//!
//! Every lookup is scoped by `hospital_id`; usernames are unique per
//! hospital, not globally.

use chrono::{DateTime, Utc};
use medika_core::error::MedikaResult;
use medika_core::models::staff::{CreateStaff, Staff};
use medika_core::repository::StaffRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct StaffRow {
    hospital_id: String,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StaffRow {
    fn into_staff(self, id: Uuid) -> Result<Staff, DbError> {
        let hospital_id = Uuid::parse_str(&self.hospital_id)
            .map_err(|e| DbError::Conversion(format!("invalid hospital UUID: {e}")))?;
        Ok(Staff {
            id,
            hospital_id,
            username: self.username,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct StaffRowWithId {
    record_id: String,
    hospital_id: String,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StaffRowWithId {
    fn try_into_staff(self) -> Result<Staff, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Conversion(format!("invalid UUID: {e}")))?;
        let hospital_id = Uuid::parse_str(&self.hospital_id)
            .map_err(|e| DbError::Conversion(format!("invalid hospital UUID: {e}")))?;
        Ok(Staff {
            id,
            hospital_id,
            username: self.username,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Row struct for the owning-hospital lookup.
#[derive(Debug, SurrealValue)]
struct HospitalIdRow {
    hospital_id: String,
}

/// SurrealDB implementation of the Staff repository.
#[derive(Clone)]
pub struct SurrealStaffRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealStaffRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> StaffRepository for SurrealStaffRepository<C> {
    async fn create(&self, input: CreateStaff) -> MedikaResult<Staff> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let hospital_id_str = input.hospital_id.to_string();

        if !super::hospital_exists(&self.db, &hospital_id_str).await? {
            return Err(DbError::NotFound {
                entity: "hospital".into(),
                id: hospital_id_str,
            }
            .into());
        }

        // Reject duplicates up front with a distinguishable error;
        // the unique index on (hospital_id, username) is the backstop
        // under concurrent creation.
        let mut existing = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM staff \
                 WHERE hospital_id = $hospital_id AND username = $username",
            )
            .bind(("hospital_id", hospital_id_str.clone()))
            .bind(("username", input.username.clone()))
            .await
            .map_err(DbError::from)?;
        let taken: Vec<StaffRowWithId> = existing.take(0).map_err(DbError::from)?;
        if !taken.is_empty() {
            return Err(DbError::Duplicate {
                entity: "staff".into(),
            }
            .into());
        }

        let result = self
            .db
            .query(
                "CREATE type::record('staff', $id) SET \
                 hospital_id = $hospital_id, \
                 username = $username, \
                 password_hash = $password_hash",
            )
            .bind(("id", id_str.clone()))
            .bind(("hospital_id", hospital_id_str))
            .bind(("username", input.username))
            .bind(("password_hash", input.password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<StaffRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "staff".into(),
            id: id_str,
        })?;

        Ok(row.into_staff(id)?)
    }

    async fn get_by_username(&self, hospital_id: Uuid, username: &str) -> MedikaResult<Staff> {
        let hospital_id_str = hospital_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM staff \
                 WHERE hospital_id = $hospital_id AND username = $username",
            )
            .bind(("hospital_id", hospital_id_str))
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<StaffRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "staff".into(),
            id: format!("username={username}"),
        })?;

        Ok(row.try_into_staff()?)
    }

    async fn hospital_of(&self, staff_id: Uuid) -> MedikaResult<Uuid> {
        let id_str = staff_id.to_string();

        let mut result = self
            .db
            .query("SELECT hospital_id FROM type::record('staff', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HospitalIdRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "staff".into(),
            id: id_str,
        })?;

        Ok(Uuid::parse_str(&row.hospital_id)
            .map_err(|e| DbError::Conversion(format!("invalid hospital UUID: {e}")))?)
    }
}
