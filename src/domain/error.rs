use thiserror::Error;

use crate::domain::services::strength_policy::StrengthViolation;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Weak password: {0}")]
    WeakPassword(StrengthViolation),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Empty display name")]
    EmptyDisplayName,
}

/// Failures of the credential hashing/verification component. Every failure of
/// the underlying primitive is converted into one of these; nothing panics and
/// no foreign error type crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Credential must be a non-empty string")]
    EmptyCredential,

    #[error("Credential must be at least 8 characters long")]
    CredentialTooShort,

    #[error("Hash must be a non-empty string")]
    EmptyHash,

    /// The stored hash is not a decodable bcrypt string. Distinct from a
    /// wrong password, which verifies cleanly to `false`.
    #[error("Stored hash is not decodable: {0}")]
    MalformedHash(String),

    /// Unexpected failure inside the hashing primitive, message preserved
    /// for logging.
    #[error("Hashing failed: {0}")]
    Hashing(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Storage error: {0}")]
    StorageError(String),
}
