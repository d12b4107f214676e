// Password hashing using bcrypt
// Decision: fixed cost 10 to stay compatible with hashes already stored
// by earlier deployments

use anyhow::{Context, Result};

/// bcrypt work factor for new hashes
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, HASH_COST).context("Failed to hash password")
}

/// Compare a plaintext password with a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).context("Failed to parse password hash")
}
