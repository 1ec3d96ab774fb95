use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{AccountId, Email},
        credential::{Credential, HashedPassword},
    },
};

#[async_trait]
pub trait CredentialRepository {
    async fn get_credential(&self, email: &Email) -> Result<Credential, RepositoryError>;

    /// Replace the stored hash for an account, e.g. after a work-factor
    /// rotation.
    async fn update_password(
        &self,
        account_id: &AccountId,
        password_hash: HashedPassword,
    ) -> Result<(), RepositoryError>;
}
