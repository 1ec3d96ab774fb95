use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{Account, AccountId, Email},
        credential::{Credential, HashedPassword},
    },
    repositories::{
        account_repository::AccountRepository, credential_repository::CredentialRepository,
    },
};

struct StoredAccount {
    account: Account,
    credential: Credential,
}

/// Accounts and credentials in one map keyed by email, so registration is
/// atomic under a single write lock. Stands in for the real persistence
/// layer behind the same repository traits.
#[derive(Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, StoredAccount>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email.as_str()).map(|s| s.account.clone()))
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|s| s.account.id() == id)
            .map(|s| s.account.clone()))
    }

    async fn register_account(
        &self,
        email: &Email,
        display_name: &str,
        password_hash: HashedPassword,
    ) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email.as_str()) {
            return Err(RepositoryError::AlreadyExists);
        }

        let account = Account::new(AccountId::new(), email.clone(), display_name.to_string())
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        let credential = Credential::new(*account.id(), password_hash);

        accounts.insert(
            email.as_str().to_string(),
            StoredAccount {
                account: account.clone(),
                credential,
            },
        );
        Ok(account)
    }
}

#[async_trait]
impl CredentialRepository for InMemoryAccountStore {
    async fn get_credential(&self, email: &Email) -> Result<Credential, RepositoryError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(email.as_str())
            .map(|s| s.credential.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn update_password(
        &self,
        account_id: &AccountId,
        password_hash: HashedPassword,
    ) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .values_mut()
            .find(|s| s.account.id() == account_id)
            .ok_or(RepositoryError::NotFound)?;
        stored.credential.change_password(password_hash);
        Ok(())
    }
}
