use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{Account, AccountId, Email},
        credential::HashedPassword,
    },
};

#[async_trait]
pub trait AccountRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError>;

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError>;

    /// Create the account and its credential atomically. Fails with
    /// `AlreadyExists` when the email is taken.
    async fn register_account(
        &self,
        email: &Email,
        display_name: &str,
        password_hash: HashedPassword,
    ) -> Result<Account, RepositoryError>;
}
