use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

pub type DisplayName = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);
impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Value object for a login email. Only shape is checked here; deliverability
/// is the mail provider's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);
impl Email {
    pub fn new(value: String) -> Result<Self, DomainError> {
        let (local, domain) = value.split_once('@').ok_or(DomainError::InvalidEmail)?;
        if local.is_empty() || domain.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidEmail);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    email: Email,
    display_name: DisplayName,
}

impl Account {
    pub fn new(
        id: AccountId,
        email: Email,
        display_name: DisplayName,
    ) -> Result<Self, DomainError> {
        if display_name.is_empty() {
            return Err(DomainError::EmptyDisplayName);
        }

        Ok(Self {
            id,
            email,
            display_name,
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }
    pub fn email(&self) -> &Email {
        &self.email
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("owner@bistro.example")]
    #[case("a@b")]
    fn accepts_plausible_emails(#[case] raw: &str) {
        assert!(Email::new(raw.to_string()).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign")]
    #[case("@bistro.example")]
    #[case("owner@")]
    #[case("owner @bistro.example")]
    fn rejects_malformed_emails(#[case] raw: &str) {
        assert!(matches!(
            Email::new(raw.to_string()),
            Err(DomainError::InvalidEmail)
        ));
    }

    #[test]
    fn account_requires_display_name() {
        let email = Email::new("owner@bistro.example".to_string()).unwrap();
        let err = Account::new(AccountId::new(), email, String::new());
        assert!(matches!(err, Err(DomainError::EmptyDisplayName)));
    }
}
