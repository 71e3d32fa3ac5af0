//! Patient domain model and search criteria.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient record, owned exclusively by one hospital.
///
/// Names are bilingual: a Thai set and an English set, each with
/// first/middle/last components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub first_name_th: String,
    pub middle_name_th: String,
    pub last_name_th: String,
    pub first_name_en: String,
    pub middle_name_en: String,
    pub last_name_en: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Hospital number — the hospital's own patient reference.
    pub patient_hn: String,
    pub national_id: String,
    pub passport_id: String,
    pub phone_number: String,
    pub email: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new patient record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePatient {
    pub hospital_id: Uuid,
    #[serde(default)]
    pub first_name_th: String,
    #[serde(default)]
    pub middle_name_th: String,
    #[serde(default)]
    pub last_name_th: String,
    #[serde(default)]
    pub first_name_en: String,
    #[serde(default)]
    pub middle_name_en: String,
    #[serde(default)]
    pub last_name_en: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub patient_hn: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub passport_id: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
}

/// Optional search predicates for patient lookup.
///
/// Each field is independently absent or present; absent and
/// empty-string values contribute no predicate. There is deliberately
/// no hospital field here — the hospital scope always comes from the
/// authenticated caller, never from the request payload (unknown
/// payload fields are dropped at deserialization).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientSearchCriteria {
    pub national_id: Option<String>,
    pub passport_id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}
