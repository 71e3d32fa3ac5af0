//! Password hashing and verification using Argon2id.

use std::borrow::Cow;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

// OWASP ASVS recommended Argon2id parameters.
const MEMORY_KIB: u32 = 19_456;
const ITERATIONS: u32 = 2;
const LANES: u32 = 1;

fn hasher() -> Result<Argon2<'static>, AuthError> {
    let params = argon2::Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
        .map_err(|e| AuthError::Crypto(format!("argon2 parameters: {e}")))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Prepend the configured pepper, if any. Borrows when there is none.
fn peppered<'a>(password: &'a str, pepper: Option<&str>) -> Cow<'a, [u8]> {
    match pepper {
        Some(p) => Cow::Owned(format!("{p}{password}").into_bytes()),
        None => Cow::Borrowed(password.as_bytes()),
    }
}

/// Hash a password with Argon2id; fresh random salt per call.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let input = peppered(password, pepper);

    let hash = hasher()?
        .hash_password(input.as_ref(), &salt)
        .map_err(|e| AuthError::Crypto(format!("password hashing: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// `Ok(false)` is a clean mismatch. A stored hash that cannot be
/// parsed is a `Crypto` error, since it indicates credential-store
/// corruption rather than bad client input.
pub fn verify_password(
    password: &str,
    hash: &str,
    pepper: Option<&str>,
) -> Result<bool, AuthError> {
    let parsed = argon2::PasswordHash::new(hash)
        .map_err(|e| AuthError::Crypto(format!("stored hash is not valid PHC: {e}")))?;

    let input = peppered(password, pepper);
    // Parameters come from the PHC string itself, so stored hashes
    // keep verifying across parameter upgrades.
    match Argon2::default().verify_password(input.as_ref(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("password verification: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_accepts_only_the_original_password() {
        let hash = hash_password("s3cure pa55word", None).unwrap();
        assert!(verify_password("s3cure pa55word", &hash, None).unwrap());
        assert!(!verify_password("s3cure pa55w0rd", &hash, None).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        assert_ne!(
            hash_password("same input", None).unwrap(),
            hash_password("same input", None).unwrap()
        );
    }

    #[test]
    fn pepper_participates_in_both_directions() {
        let hash = hash_password("s3cure pa55word", Some("spicy")).unwrap();
        assert!(verify_password("s3cure pa55word", &hash, Some("spicy")).unwrap());
        assert!(!verify_password("s3cure pa55word", &hash, None).unwrap());
        assert!(!verify_password("s3cure pa55word", &hash, Some("mild")).unwrap());
    }

    #[test]
    fn corrupted_stored_hash_is_a_crypto_error() {
        assert!(matches!(
            verify_password("pw", "$2b$not-argon2", None),
            Err(AuthError::Crypto(_))
        ));
    }
}
