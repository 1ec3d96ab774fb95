use crate::domain::{error::CredentialError, models::credential::HashedPassword};

/// Service for hashing and verifying passwords. Implementations are plain
/// injected values; there is no process-wide hasher state.
pub trait PasswordHasher: Clone {
    /// Hash a plain text password with a fresh random salt.
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, CredentialError>;

    /// Verify a plain text password against a stored hash. A wrong password
    /// is `Ok(false)`; only an undecodable hash is an error.
    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, CredentialError>;

    /// Whether the stored hash was produced with a lower work factor than the
    /// current target and should be rotated on next successful login.
    fn needs_rehash(&self, hashed_password: &HashedPassword) -> bool;
}
