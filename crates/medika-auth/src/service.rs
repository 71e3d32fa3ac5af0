//! Authentication service — staff registration, login, and the
//! request authentication gate.

use medika_core::error::{MedikaError, MedikaResult};
use medika_core::models::staff::{CreateStaff, Staff};
use medika_core::repository::StaffRepository;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Client-facing message for every credential-stage gate rejection.
/// One string for all causes so responses cannot reveal which
/// verification step failed.
const GENERIC_CREDENTIAL_FAILURE: &str = "invalid or missing credentials";

/// Input for staff registration.
#[derive(Debug)]
pub struct RegisterStaffInput {
    pub hospital_id: Uuid,
    pub username: String,
    pub password: String,
}

/// Verified identity of the caller, fixed for the request lifetime.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub staff_id: Uuid,
    pub hospital_id: Uuid,
}

/// Authentication service.
///
/// Generic over the staff repository so that the auth layer has no
/// dependency on the database crate.
#[derive(Clone)]
pub struct AuthService<S: StaffRepository> {
    staff_repo: S,
    config: AuthConfig,
}

impl<S: StaffRepository> AuthService<S> {
    pub fn new(staff_repo: S, config: AuthConfig) -> Self {
        Self { staff_repo, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new staff member with a hashed password.
    ///
    /// Duplicate `(username, hospital)` pairs are reported with
    /// distinguishable detail — unlike login, registration is not
    /// enumeration-sensitive.
    pub async fn register(&self, input: RegisterStaffInput) -> MedikaResult<Staff> {
        // Usernames are stored trimmed so that padded spellings of the
        // same name cannot coexist as distinct credentials.
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(MedikaError::Validation {
                message: "username must not be empty".into(),
            });
        }
        if input.password.len() < self.config.min_password_length {
            return Err(MedikaError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let password_hash =
            password::hash_password(&input.password, self.config.pepper.as_deref())?;

        let staff = self
            .staff_repo
            .create(CreateStaff {
                hospital_id: input.hospital_id,
                username,
                password_hash,
            })
            .await?;

        tracing::debug!(staff_id = %staff.id, hospital_id = %staff.hospital_id, "staff account created");
        Ok(staff)
    }

    /// Authenticate a staff member and issue an access token.
    ///
    /// Unknown usernames and wrong passwords produce the same error
    /// so that responses cannot be used to enumerate accounts.
    pub async fn login(
        &self,
        hospital_id: Uuid,
        username: &str,
        password: &str,
    ) -> MedikaResult<String> {
        // 1. Look up the account within the caller's hospital.
        // Lookup uses the trimmed form registration stores.
        let staff = match self
            .staff_repo
            .get_by_username(hospital_id, username.trim())
            .await
        {
            Ok(s) => s,
            Err(MedikaError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        // 2. Verify the password.
        let valid = password::verify_password(
            password,
            &staff.password_hash,
            self.config.pepper.as_deref(),
        )?;
        if !valid {
            tracing::debug!(staff_id = %staff.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        // 3. Issue the access token.
        Ok(token::issue_access_token(staff.id, &self.config)?)
    }

    /// Resolve a verified token subject to its owning hospital.
    ///
    /// This is the single checkpoint every hospital-scoped operation
    /// passes through; the raw subject is re-validated as a
    /// well-formed identifier before it is used as a lookup key.
    pub async fn resolve_hospital(&self, subject: &str) -> MedikaResult<AuthContext> {
        let staff_id =
            Uuid::parse_str(subject).map_err(|_| MedikaError::from(AuthError::InvalidIdentifier))?;
        let hospital_id = self.staff_repo.hospital_of(staff_id).await?;
        Ok(AuthContext {
            staff_id,
            hospital_id,
        })
    }

    /// Run the full request authentication gate:
    /// credential extraction, token verification, hospital resolution.
    ///
    /// Any failure rejects the request; there is no partial success.
    /// Every credential-stage failure (missing header, bad scheme,
    /// malformed/expired/forged token, unusable subject) is surfaced
    /// with one uniform message — the specific cause is logged
    /// server-side only. A verified identity with no backing staff
    /// row is an authorization failure, not a lookup miss.
    pub async fn authenticate(&self, authorization: Option<&str>) -> MedikaResult<AuthContext> {
        let subject = match self.verify_credential(authorization) {
            Ok(subject) => subject,
            // Operator error, not a client credential problem.
            Err(AuthError::Misconfigured(msg)) => return Err(MedikaError::Misconfigured(msg)),
            Err(cause) => return Err(Self::reject(cause)),
        };

        self.resolve_hospital(&subject).await.map_err(|e| match e {
            MedikaError::NotFound { .. } => MedikaError::AuthorizationDenied {
                reason: "authenticated staff identity is not known".into(),
            },
            MedikaError::Validation { .. } => Self::reject(AuthError::InvalidIdentifier),
            other => other,
        })
    }

    fn verify_credential(&self, authorization: Option<&str>) -> Result<String, AuthError> {
        let header = authorization.ok_or(AuthError::MissingCredential)?;
        let raw = token::extract_bearer(header)?;
        token::verify_access_token(raw, &self.config)
    }

    fn reject(cause: AuthError) -> MedikaError {
        tracing::debug!(cause = %cause, "request authentication rejected");
        MedikaError::AuthenticationFailed {
            reason: GENERIC_CREDENTIAL_FAILURE.into(),
        }
    }
}
