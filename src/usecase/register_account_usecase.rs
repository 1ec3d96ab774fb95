use crate::domain::{
    error::DomainError,
    models::account::{Account, Email},
    repositories::account_repository::AccountRepository,
    services::{password_service::PasswordHasher, strength_policy},
};

pub struct RegisterAccountUsecase<A: AccountRepository, P: PasswordHasher> {
    account_repository: A,
    password_hasher: P,
}

impl<A: AccountRepository, P: PasswordHasher> RegisterAccountUsecase<A, P> {
    pub fn new(account_repository: A, password_hasher: P) -> Self {
        Self {
            account_repository,
            password_hasher,
        }
    }

    pub async fn register(
        &self,
        email: String,
        display_name: String,
        password: String,
    ) -> Result<Account, DomainError>
    where
        A: Send + Sync,
        P: Send + Sync,
    {
        let email = Email::new(email)?;
        if display_name.is_empty() {
            return Err(DomainError::EmptyDisplayName);
        }

        // Strength rules gate hashing; a hash must never be derived from a
        // password that failed validation.
        strength_policy::validate_strength(&password).map_err(DomainError::WeakPassword)?;

        let password_hash = self.password_hasher.hash(&password)?;

        let account = self
            .account_repository
            .register_account(&email, &display_name, password_hash)
            .await?;

        Ok(account)
    }
}
