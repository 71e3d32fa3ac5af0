//! SurrealDB repository implementations.

mod hospital;
mod patient;
mod staff;

pub use hospital::SurrealHospitalRepository;
pub use patient::SurrealPatientRepository;
pub use staff::SurrealStaffRepository;

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RecordIdRow {
    #[allow(dead_code)]
    record_id: String,
}

/// Tenant-reference guard: rows that point at a hospital may only be
/// created while that hospital exists.
pub(crate) async fn hospital_exists<C: Connection>(
    db: &Surreal<C>,
    hospital_id: &str,
) -> Result<bool, DbError> {
    let mut result = db
        .query("SELECT meta::id(id) AS record_id FROM type::record('hospital', $id)")
        .bind(("id", hospital_id.to_string()))
        .await?;
    let rows: Vec<RecordIdRow> = result.take(0)?;
    Ok(!rows.is_empty())
}
