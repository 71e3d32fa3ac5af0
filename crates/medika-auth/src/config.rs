//! Authentication configuration.

use crate::error::AuthError;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret for HMAC (HS256) token signing. Must be
    /// non-empty; an empty secret fails every issue/verify call.
    pub jwt_secret: String,
    /// Access token lifetime in seconds (default: 86_400 = 24 hours).
    pub token_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id
    /// hashing and verification.
    pub pepper: Option<String>,
    /// Minimum password length for policy enforcement.
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_secs: 86_400,
            pepper: None,
            min_password_length: 8,
        }
    }
}

impl AuthConfig {
    /// Returns the signing secret, refusing an empty one.
    ///
    /// The secret is checked on every call so that a secret cleared
    /// at runtime fails closed instead of signing with an empty key.
    pub fn require_secret(&self) -> Result<&[u8], AuthError> {
        if self.jwt_secret.is_empty() {
            return Err(AuthError::Misconfigured(
                "token signing secret is empty".into(),
            ));
        }
        Ok(self.jwt_secret.as_bytes())
    }
}
