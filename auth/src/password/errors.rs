use thiserror::Error;

/// Error type for password hashing and verification.
///
/// `VerificationFailed` covers malformed stored hashes; a well-formed hash
/// that simply does not match returns `Ok(false)` from verify, not an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
