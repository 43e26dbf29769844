/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt so the rest of the backend never touches the
 * cost parameter or the raw bcrypt error type.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::error::BackendError;

/// Hash a plaintext password with bcrypt (`DEFAULT_COST`)
pub fn hash_password(password: &str) -> Result<String, BackendError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch and `Err` only if the stored hash is
/// malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    Ok(verify(password, password_hash)?)
}
