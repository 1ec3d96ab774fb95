use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::account::AccountId;

/// Value object representing a hashed password. The string is self-describing:
/// algorithm tag, cost factor and salt are embedded alongside the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    account_id: AccountId,
    password_hash: HashedPassword,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(account_id: AccountId, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored hash, e.g. when rotating onto a higher work factor.
    pub fn change_password(&mut self, new_password_hash: HashedPassword) {
        self.password_hash = new_password_hash;
        self.updated_at = Utc::now();
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
