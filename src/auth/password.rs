use anyhow::{Context, Result};

/// Hash a plaintext password with a per-hash random salt
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).context("Failed to hash password")
}

/// Check a plaintext password against a stored hash. Any verification
/// failure, including a malformed hash, reads as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
