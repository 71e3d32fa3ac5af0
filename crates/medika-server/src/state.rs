//! Shared application state available to all request handlers.

use medika_auth::{AuthConfig, AuthService};
use medika_db::DbManager;
use medika_db::repository::{
    SurrealHospitalRepository, SurrealPatientRepository, SurrealStaffRepository,
};
use surrealdb::engine::remote::ws::Client;

/// Shared state: one clone per request, all members cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService<SurrealStaffRepository<Client>>,
    pub hospitals: SurrealHospitalRepository<Client>,
    pub patients: SurrealPatientRepository<Client>,
}

impl AppState {
    pub fn new(manager: &DbManager, auth_config: AuthConfig) -> Self {
        let client = manager.client().clone();
        Self {
            auth: AuthService::new(SurrealStaffRepository::new(client.clone()), auth_config),
            hospitals: SurrealHospitalRepository::new(client.clone()),
            patients: SurrealPatientRepository::new(client),
        }
    }
}
