use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// Hash a plaintext password with bcrypt at the library's default cost.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(password, password_hash)
}
