//! Argon2 password hashing.
//!
//! Hashes are stored as PHC strings, which carry their own salt and parameters, so a
//! hash produced with different parameters still verifies.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hash a password with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(Error::PasswordHashError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the stored hash is malformed
/// - `Err(Error::PasswordHashError)` - Verification failed for another reason
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(error = %err, "Stored password hash is malformed");
            return Ok(false);
        }
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
