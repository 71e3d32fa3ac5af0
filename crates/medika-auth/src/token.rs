//! HS256 access token issuance and verification, plus bearer
//! credential extraction.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — staff ID (UUID string).
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Claims as they arrive off the wire, before required-field checks.
///
/// The subject is read untyped so that an absent or non-string `sub`
/// is reported as [`AuthError::MissingSubject`] at decode time rather
/// than as a deserialization failure at point of use.
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<serde_json::Value>,
}

/// Issue a signed HS256 access token for a staff member.
pub fn issue_access_token(staff_id: Uuid, config: &AuthConfig) -> Result<String, AuthError> {
    let secret = config.require_secret()?;
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: staff_id.to_string(),
        iat: now,
        exp: now + config.token_lifetime_secs as i64,
    };

    let key = EncodingKey::from_secret(secret);
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an access token, returning its subject claim.
///
/// Only HMAC-family algorithms (HS256/384/512) signed with the shared
/// secret are accepted; any other algorithm is a signature mismatch.
/// The subject is returned unmodified — callers must parse it into a
/// staff ID before using it as a lookup key.
pub fn verify_access_token(token: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let secret = config.require_secret()?;
    let key = DecodingKey::from_secret(secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.set_required_spec_claims(&["exp"]);

    let data = jsonwebtoken::decode::<RawClaims>(token, &key, &validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::SignatureMismatch
            }
            _ => AuthError::MalformedToken,
        }
    })?;

    match data.claims.sub {
        Some(serde_json::Value::String(sub)) => Ok(sub),
        _ => Err(AuthError::MissingSubject),
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
/// value.
///
/// Exactly two space-separated parts with a `Bearer` scheme are
/// required; anything else is rejected before verification is
/// attempted.
pub fn extract_bearer(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) if !token.is_empty() && !token.contains(' ') => Ok(token),
        _ => Err(AuthError::MissingCredential),
    }
}
