//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. Creation/update timestamps default
//! server-side; client-supplied values never reach them.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Hospitals (the tenancy unit)
-- =======================================================================
DEFINE TABLE hospital SCHEMAFULL;
DEFINE FIELD name ON TABLE hospital TYPE string;
DEFINE FIELD created_at ON TABLE hospital TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE hospital TYPE datetime \
    DEFAULT time::now();

-- =======================================================================
-- Staff (hospital scope)
-- =======================================================================
DEFINE TABLE staff SCHEMAFULL;
DEFINE FIELD hospital_id ON TABLE staff TYPE string;
DEFINE FIELD username ON TABLE staff TYPE string;
DEFINE FIELD password_hash ON TABLE staff TYPE string;
DEFINE FIELD created_at ON TABLE staff TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE staff TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_staff_hospital_username ON TABLE staff \
    COLUMNS hospital_id, username UNIQUE;

-- =======================================================================
-- Patients (hospital scope)
-- =======================================================================
DEFINE TABLE patient SCHEMAFULL;
DEFINE FIELD hospital_id ON TABLE patient TYPE string;
DEFINE FIELD first_name_th ON TABLE patient TYPE string;
DEFINE FIELD middle_name_th ON TABLE patient TYPE string;
DEFINE FIELD last_name_th ON TABLE patient TYPE string;
DEFINE FIELD first_name_en ON TABLE patient TYPE string;
DEFINE FIELD middle_name_en ON TABLE patient TYPE string;
DEFINE FIELD last_name_en ON TABLE patient TYPE string;
-- ISO calendar date (YYYY-MM-DD); exact-match comparisons only.
DEFINE FIELD date_of_birth ON TABLE patient TYPE option<string>;
DEFINE FIELD patient_hn ON TABLE patient TYPE string;
DEFINE FIELD national_id ON TABLE patient TYPE string;
DEFINE FIELD passport_id ON TABLE patient TYPE string;
DEFINE FIELD phone_number ON TABLE patient TYPE string;
DEFINE FIELD email ON TABLE patient TYPE string;
DEFINE FIELD gender ON TABLE patient TYPE string;
DEFINE FIELD created_at ON TABLE patient TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE patient TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_patient_hospital ON TABLE patient \
    COLUMNS hospital_id;
DEFINE INDEX idx_patient_hospital_national_id ON TABLE patient \
    COLUMNS hospital_id, national_id;
";

/// Apply any pending migrations, in version order.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}
