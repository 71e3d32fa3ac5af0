//! SurrealDB implementation of [`HospitalRepository`].

use chrono::{DateTime, Utc};
use medika_core::error::MedikaResult;
use medika_core::models::hospital::{CreateHospital, Hospital};
use medika_core::repository::HospitalRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct HospitalRow {
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HospitalRow {
    fn into_hospital(self, id: Uuid) -> Hospital {
        Hospital {
            id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// SurrealDB implementation of the Hospital repository.
#[derive(Clone)]
pub struct SurrealHospitalRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealHospitalRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> HospitalRepository for SurrealHospitalRepository<C> {
    async fn create(&self, input: CreateHospital) -> MedikaResult<Hospital> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query("CREATE type::record('hospital', $id) SET name = $name")
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<HospitalRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "hospital".into(),
            id: id_str,
        })?;

        Ok(row.into_hospital(id))
    }

    async fn get_by_id(&self, id: Uuid) -> MedikaResult<Hospital> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('hospital', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HospitalRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "hospital".into(),
            id: id_str,
        })?;

        Ok(row.into_hospital(id))
    }
}
