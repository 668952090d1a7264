//! Driver account passwords: Argon2id hashing and the registration length rule.
//!
//! Hashes are stored as PHC strings, so salt and parameters travel with them.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use loadbuck_core::error::CoreError;

use crate::error::AppError;

/// Minimum password length accepted at registration, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`].
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password for storage in `users.password_hash`.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Check a sign-in attempt against a stored hash.
///
/// A mismatch is `Ok(false)`. A stored hash that cannot be parsed is an
/// internal error, not a failed sign-in.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalError(format!(
            "Password verification error: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn stored_hash_is_argon2id_and_verifies() {
        let hash = hash_password("long-haul-reefer").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("long-haul-reefer", &hash).unwrap());
        assert!(!verify_password("short-haul-reefer", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_a_fresh_salt() {
        let a = hash_password("demo123").unwrap();
        let b = hash_password("demo123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unparseable_stored_hash_is_internal() {
        assert_matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AppError::InternalError(msg)) if msg.contains("invalid")
        );
    }

    #[test]
    fn short_password_is_a_validation_error() {
        assert_matches!(
            validate_password_strength("abc12"),
            Err(CoreError::Validation(msg)) if msg == "Password must be at least 6 characters"
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_password_strength("demo12").is_ok());
        // Six characters, twelve bytes.
        assert!(validate_password_strength("ééééé").is_err());
        assert!(validate_password_strength("éééééé").is_ok());
    }
}
