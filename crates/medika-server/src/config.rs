//! Server configuration, assembled from environment variables at
//! startup.

use std::env;

use medika_auth::AuthConfig;
use medika_core::error::MedikaError;
use medika_db::DbConfig;

/// Top-level configuration for the server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`, default 8080).
    pub port: u16,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    ///
    /// An empty or missing `JWT_SECRET` is fatal here; the auth layer
    /// re-checks the secret on every call as a second line of defense.
    pub fn from_env() -> Result<Self, MedikaError> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() {
            return Err(MedikaError::Misconfigured(
                "JWT_SECRET must be set and non-empty".into(),
            ));
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                MedikaError::Misconfigured(format!("PORT is not a valid port number: {raw}"))
            })?,
            Err(_) => 8080,
        };

        let mut db = DbConfig::default();
        if let Ok(v) = env::var("DB_URL") {
            db.url = v;
        }
        if let Ok(v) = env::var("DB_NAMESPACE") {
            db.namespace = v;
        }
        if let Ok(v) = env::var("DB_DATABASE") {
            db.database = v;
        }
        if let Ok(v) = env::var("DB_USER") {
            db.username = v;
        }
        if let Ok(v) = env::var("DB_PASSWORD") {
            db.password = v;
        }

        let auth = AuthConfig {
            jwt_secret,
            pepper: env::var("PASSWORD_PEPPER").ok().filter(|s| !s.is_empty()),
            ..AuthConfig::default()
        };

        Ok(Self { port, db, auth })
    }
}
