//! Argon2id password hashing for the email + password sign-up path.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), so the salt and parameters
//! travel with the hash and [`verify_password`] needs nothing else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Password(e.to_string()))
}

/// Check `password` against a stored PHC hash. A malformed hash is an error, a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(hash).map_err(|e| ApiError::Password(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("anything", "plaintext"),
            Err(ApiError::Password(_))
        ));
    }
}
