//! Authentication error types.

use medika_core::error::MedikaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately covers both unknown-username and wrong-password
    /// so callers cannot enumerate accounts.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("missing or malformed authorization credential")]
    MissingCredential,

    #[error("malformed token")]
    MalformedToken,

    #[error("token signature mismatch")]
    SignatureMismatch,

    #[error("token has expired")]
    TokenExpired,

    #[error("token subject missing or not a string")]
    MissingSubject,

    #[error("invalid staff identifier")]
    InvalidIdentifier,

    #[error("auth misconfigured: {0}")]
    Misconfigured(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for MedikaError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::MissingCredential
            | AuthError::MalformedToken
            | AuthError::SignatureMismatch
            | AuthError::TokenExpired
            | AuthError::MissingSubject => MedikaError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::InvalidIdentifier => MedikaError::Validation {
                message: err.to_string(),
            },
            AuthError::Misconfigured(msg) => MedikaError::Misconfigured(msg),
            AuthError::Crypto(msg) => MedikaError::Crypto(msg),
        }
    }
}
