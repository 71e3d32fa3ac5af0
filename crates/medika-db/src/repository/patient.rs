//! SurrealDB implementation of [`PatientRepository`] — the
//! hospital-restricted patient search engine.
//!
//! Search queries are assembled as a predicate list: the hospital
//! scope is pushed first and unconditionally, and each present,
//! non-empty criterion appends exactly one conjunctive clause. All
//! client-supplied values travel through bind parameters.

use chrono::{DateTime, NaiveDate, Utc};
use medika_core::error::MedikaResult;
use medika_core::models::patient::{CreatePatient, Patient, PatientSearchCriteria};
use medika_core::repository::PatientRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct PatientRow {
    hospital_id: String,
    first_name_th: String,
    middle_name_th: String,
    last_name_th: String,
    first_name_en: String,
    middle_name_en: String,
    last_name_en: String,
    date_of_birth: Option<String>,
    patient_hn: String,
    national_id: String,
    passport_id: String,
    phone_number: String,
    email: String,
    gender: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PatientRow {
    fn into_patient(self, id: Uuid) -> Result<Patient, DbError> {
        let hospital_id = Uuid::parse_str(&self.hospital_id)
            .map_err(|e| DbError::Conversion(format!("invalid hospital UUID: {e}")))?;
        let date_of_birth = self.date_of_birth.as_deref().map(dob_from_storage).transpose()?;
        Ok(Patient {
            id,
            hospital_id,
            first_name_th: self.first_name_th,
            middle_name_th: self.middle_name_th,
            last_name_th: self.last_name_th,
            first_name_en: self.first_name_en,
            middle_name_en: self.middle_name_en,
            last_name_en: self.last_name_en,
            date_of_birth,
            patient_hn: self.patient_hn,
            national_id: self.national_id,
            passport_id: self.passport_id,
            phone_number: self.phone_number,
            email: self.email,
            gender: self.gender,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct PatientRowWithId {
    record_id: String,
    hospital_id: String,
    first_name_th: String,
    middle_name_th: String,
    last_name_th: String,
    first_name_en: String,
    middle_name_en: String,
    last_name_en: String,
    date_of_birth: Option<String>,
    patient_hn: String,
    national_id: String,
    passport_id: String,
    phone_number: String,
    email: String,
    gender: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PatientRowWithId {
    fn try_into_patient(self) -> Result<Patient, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Conversion(format!("invalid UUID: {e}")))?;
        let row = PatientRow {
            hospital_id: self.hospital_id,
            first_name_th: self.first_name_th,
            middle_name_th: self.middle_name_th,
            last_name_th: self.last_name_th,
            first_name_en: self.first_name_en,
            middle_name_en: self.middle_name_en,
            last_name_en: self.last_name_en,
            date_of_birth: self.date_of_birth,
            patient_hn: self.patient_hn,
            national_id: self.national_id,
            passport_id: self.passport_id,
            phone_number: self.phone_number,
            email: self.email,
            gender: self.gender,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        row.into_patient(id)
    }
}

fn dob_to_storage(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn dob_from_storage(raw: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DbError::Conversion(format!("invalid date of birth: {e}")))
}

/// True when an optional criterion carries a usable value.
///
/// Absent and empty-string criteria contribute no predicate — they
/// are never treated as "match empty".
fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// SurrealDB implementation of the Patient repository.
#[derive(Clone)]
pub struct SurrealPatientRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPatientRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PatientRepository for SurrealPatientRepository<C> {
    async fn create(&self, input: CreatePatient) -> MedikaResult<Patient> {
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

        let result = self
            .db
            .query(
                "CREATE type::record('patient', $id) SET \
                 hospital_id = $hospital_id, \
                 first_name_th = $first_name_th, \
                 middle_name_th = $middle_name_th, \
                 last_name_th = $last_name_th, \
                 first_name_en = $first_name_en, \
                 middle_name_en = $middle_name_en, \
                 last_name_en = $last_name_en, \
                 date_of_birth = $date_of_birth, \
                 patient_hn = $patient_hn, \
                 national_id = $national_id, \
                 passport_id = $passport_id, \
                 phone_number = $phone_number, \
                 email = $email, \
                 gender = $gender",
            )
            .bind(("id", id_str.clone()))
            .bind(("hospital_id", hospital_id_str))
            .bind(("first_name_th", input.first_name_th))
            .bind(("middle_name_th", input.middle_name_th))
            .bind(("last_name_th", input.last_name_th))
            .bind(("first_name_en", input.first_name_en))
            .bind(("middle_name_en", input.middle_name_en))
            .bind(("last_name_en", input.last_name_en))
            .bind(("date_of_birth", input.date_of_birth.map(dob_to_storage)))
            .bind(("patient_hn", input.patient_hn))
            .bind(("national_id", input.national_id))
            .bind(("passport_id", input.passport_id))
            .bind(("phone_number", input.phone_number))
            .bind(("email", input.email))
            .bind(("gender", input.gender))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PatientRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "patient".into(),
            id: id_str,
        })?;

        Ok(row.into_patient(id)?)
    }

    async fn search(
        &self,
        hospital_id: Uuid,
        criteria: PatientSearchCriteria,
    ) -> MedikaResult<Vec<Patient>> {
        // Hospital scope first, never optional. Criteria can only
        // narrow it.
        let mut clauses: Vec<&'static str> = vec!["hospital_id = $hospital_id"];

        if present(&criteria.national_id) {
            clauses.push("national_id = $national_id");
        }
        if present(&criteria.passport_id) {
            clauses.push("passport_id = $passport_id");
        }
        if criteria.date_of_birth.is_some() {
            clauses.push("date_of_birth = $date_of_birth");
        }
        if present(&criteria.first_name) {
            clauses.push(
                "string::contains(string::lowercase(first_name_th), \
                 string::lowercase($first_name))",
            );
        }
        if present(&criteria.middle_name) {
            clauses.push(
                "string::contains(string::lowercase(middle_name_th), \
                 string::lowercase($middle_name))",
            );
        }
        if present(&criteria.last_name) {
            clauses.push(
                "string::contains(string::lowercase(last_name_th), \
                 string::lowercase($last_name))",
            );
        }
        if present(&criteria.phone_number) {
            clauses.push(
                "string::contains(string::lowercase(phone_number), \
                 string::lowercase($phone_number))",
            );
        }
        if present(&criteria.email) {
            clauses.push(
                "string::contains(string::lowercase(email), \
                 string::lowercase($email))",
            );
        }

        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM patient WHERE {}",
            clauses.join(" AND ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("hospital_id", hospital_id.to_string()));

        if let Some(v) = criteria.national_id.filter(|s| !s.is_empty()) {
            builder = builder.bind(("national_id", v));
        }
        if let Some(v) = criteria.passport_id.filter(|s| !s.is_empty()) {
            builder = builder.bind(("passport_id", v));
        }
        if let Some(d) = criteria.date_of_birth {
            builder = builder.bind(("date_of_birth", dob_to_storage(d)));
        }
        if let Some(v) = criteria.first_name.filter(|s| !s.is_empty()) {
            builder = builder.bind(("first_name", v));
        }
        if let Some(v) = criteria.middle_name.filter(|s| !s.is_empty()) {
            builder = builder.bind(("middle_name", v));
        }
        if let Some(v) = criteria.last_name.filter(|s| !s.is_empty()) {
            builder = builder.bind(("last_name", v));
        }
        if let Some(v) = criteria.phone_number.filter(|s| !s.is_empty()) {
            builder = builder.bind(("phone_number", v));
        }
        if let Some(v) = criteria.email.filter(|s| !s.is_empty()) {
            builder = builder.bind(("email", v));
        }

        let mut result = builder.await.map_err(DbError::from)?;
        let rows: Vec<PatientRowWithId> = result.take(0).map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| Ok(row.try_into_patient()?))
            .collect()
    }
}
