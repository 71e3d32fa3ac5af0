//! Database-specific error types and conversions.

use medika_core::error::MedikaError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Row conversion failed: {0}")]
    Conversion(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    Duplicate { entity: String },
}

impl From<DbError> for MedikaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => MedikaError::NotFound { entity, id },
            DbError::Duplicate { entity } => MedikaError::AlreadyExists { entity },
            other => MedikaError::Database(other.to_string()),
        }
    }
}
