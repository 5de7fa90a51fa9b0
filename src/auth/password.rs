//! Password hashing using Argon2id
//!
//! Produces salted one-way PHC hash strings. The salt is generated fresh on
//! every call, so hashing the same password twice yields different strings;
//! verification recomputes the hash from the salt embedded in the stored
//! string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{FindashError, FindashResult};

/// Hash a password with a freshly generated salt
pub fn hash_password(password: &str) -> FindashResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| FindashError::Hash(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash string
///
/// Returns `Ok(false)` on mismatch; an error only means the stored string
/// itself is not a valid hash.
pub fn verify_password(password: &str, stored_hash: &str) -> FindashResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| FindashError::Hash(format!("Invalid stored hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
