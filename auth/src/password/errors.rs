use thiserror::Error;

/// Error type for password hashing and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed; a mismatch is not an error.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
