//! Argon2id password hashing and credential checks for login.
//!
//! Hashes are stored as PHC strings, so algorithm parameters and salt travel
//! with the hash.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub use argon2::password_hash::Error as PasswordError;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// `Ok(false)` means a well-formed hash that does not match; a malformed
/// stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordError::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a login attempt against an account's stored hash, if any.
///
/// Unknown accounts still pay for one Argon2 verification against a fixed
/// hash, so response time does not reveal which usernames exist.
pub fn verify_login(password: &str, stored_hash: Option<&str>) -> Result<bool, PasswordError> {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            let dummy = dummy_hash()?;
            verify_password(password, dummy)?;
            Ok(false)
        }
    }
}

fn dummy_hash() -> Result<&'static str, PasswordError> {
    static DUMMY: OnceLock<String> = OnceLock::new();
    if let Some(hash) = DUMMY.get() {
        return Ok(hash);
    }
    let hash = hash_password("learning-log-placeholder")?;
    Ok(DUMMY.get_or_init(|| hash))
}
