use tracing::warn;

use crate::domain::{
    error::DomainError,
    models::{
        account::{Account, Email},
        credential::Credential,
    },
    repositories::{
        account_repository::AccountRepository, credential_repository::CredentialRepository,
    },
    services::password_service::PasswordHasher,
};

pub struct LoginUsecase<C: CredentialRepository, A: AccountRepository, P: PasswordHasher> {
    credential_repository: C,
    account_repository: A,
    password_hasher: P,
}

impl<C: CredentialRepository, A: AccountRepository, P: PasswordHasher> LoginUsecase<C, A, P> {
    pub fn new(credential_repository: C, account_repository: A, password_hasher: P) -> Self {
        Self {
            credential_repository,
            account_repository,
            password_hasher,
        }
    }

    /// Authenticate an email/password pair. Unknown account, wrong password
    /// and undecodable stored hash all collapse into `AuthenticationFailed`;
    /// the distinguishing detail is only logged.
    pub async fn login(&self, email: String, password: String) -> Result<Account, DomainError>
    where
        C: Send + Sync,
        A: Send + Sync,
        P: Send + Sync,
    {
        let email = Email::new(email)?;

        let credential = self
            .credential_repository
            .get_credential(&email)
            .await
            .map_err(|_| DomainError::AuthenticationFailed)?;

        let matched = match self
            .password_hasher
            .verify(&password, credential.password_hash())
        {
            Ok(matched) => matched,
            Err(err) => {
                warn!(account_id = %credential.account_id(), error = %err,
                    "credential verification impossible");
                return Err(DomainError::AuthenticationFailed);
            }
        };
        if !matched {
            return Err(DomainError::AuthenticationFailed);
        }

        if self.password_hasher.needs_rehash(credential.password_hash()) {
            self.rotate_credential(&credential, &password).await;
        }

        self.account_repository
            .find_by_id(credential.account_id())
            .await?
            .ok_or(DomainError::AuthenticationFailed)
    }

    /// Re-hash the just-verified plaintext under the current work factor.
    /// Failures are logged but never fail the login; the old hash is still
    /// valid.
    async fn rotate_credential(&self, credential: &Credential, password: &str)
    where
        C: Send + Sync,
        P: Send + Sync,
    {
        match self.password_hasher.hash(password) {
            Ok(new_hash) => {
                if let Err(err) = self
                    .credential_repository
                    .update_password(credential.account_id(), new_hash)
                    .await
                {
                    warn!(account_id = %credential.account_id(), error = %err,
                        "failed to persist rotated credential");
                }
            }
            Err(err) => {
                warn!(account_id = %credential.account_id(), error = %err,
                    "failed to rotate credential");
            }
        }
    }
}
