use crate::domain::{
    error::CredentialError,
    models::credential::HashedPassword,
    services::{password_service::PasswordHasher, strength_policy::MIN_LENGTH},
};

/// bcrypt cost parameter. Deliberately expensive (hundreds of milliseconds)
/// to slow offline brute-force; hashes stored with a lower cost are rotated
/// on login via `needs_rehash`.
pub const WORK_FACTOR: u32 = 12;

#[derive(Clone)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the cost field from a self-describing `$2<a|b|x|y>$NN$...` hash.
/// Returns None for anything that does not look like a bcrypt string.
fn embedded_cost(hash: &str) -> Option<u32> {
    let mut parts = hash.split('$');
    if !parts.next()?.is_empty() {
        return None;
    }
    match parts.next()? {
        "2" | "2a" | "2b" | "2x" | "2y" => {}
        _ => return None,
    }
    let cost = parts.next()?.parse().ok()?;
    // the salt+digest body must be present too
    if parts.next()?.is_empty() {
        return None;
    }
    Some(cost)
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, CredentialError> {
        if plain_password.is_empty() {
            return Err(CredentialError::EmptyCredential);
        }
        // Minimal guard only; full strength validation is the caller's job
        // and happens before hashing.
        if plain_password.chars().count() < MIN_LENGTH {
            return Err(CredentialError::CredentialTooShort);
        }

        let hash = bcrypt::hash(plain_password, WORK_FACTOR)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;

        Ok(HashedPassword::new(hash))
    }

    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, CredentialError> {
        if plain_password.is_empty() {
            return Err(CredentialError::EmptyCredential);
        }
        if hashed_password.as_str().is_empty() {
            return Err(CredentialError::EmptyHash);
        }

        // A mismatch is Ok(false); bcrypt only errors when the stored string
        // cannot be decoded as a hash.
        bcrypt::verify(plain_password, hashed_password.as_str())
            .map_err(|e| CredentialError::MalformedHash(e.to_string()))
    }

    fn needs_rehash(&self, hashed_password: &HashedPassword) -> bool {
        match embedded_cost(hashed_password.as_str()) {
            Some(cost) => cost < WORK_FACTOR,
            // never force a rehash of something we cannot even parse
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new()
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hasher().hash("Correct horse1!").unwrap();
        assert!(hashed.as_str().starts_with("$2"));
        assert!(hasher().verify("Correct horse1!", &hashed).unwrap());
    }

    #[test]
    fn hashing_twice_salts_differently_yet_both_verify() {
        let first = hasher().hash("Same input1!").unwrap();
        let second = hasher().hash("Same input1!").unwrap();
        assert_ne!(first, second);
        assert!(hasher().verify("Same input1!", &first).unwrap());
        assert!(hasher().verify("Same input1!", &second).unwrap());
    }

    #[test]
    fn hash_embeds_the_target_work_factor() {
        let hashed = hasher().hash("Correct horse1!").unwrap();
        assert_eq!(embedded_cost(hashed.as_str()), Some(WORK_FACTOR));
        assert!(!hasher().needs_rehash(&hashed));
    }

    #[test]
    fn wrong_password_is_a_clean_mismatch_not_an_error() {
        let hashed = hasher().hash("Correct horse1!").unwrap();
        assert_eq!(hasher().verify("Wrong horse1!", &hashed), Ok(false));
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let garbage = HashedPassword::new("not-a-valid-hash".to_string());
        assert!(matches!(
            hasher().verify("anything at all", &garbage),
            Err(CredentialError::MalformedHash(_))
        ));
    }

    #[test]
    fn empty_inputs_report_distinct_errors() {
        let hashed = HashedPassword::new("$2b$12$abcdefghijklmnopqrstuv".to_string());
        assert_eq!(
            hasher().verify("", &hashed),
            Err(CredentialError::EmptyCredential)
        );
        let empty = HashedPassword::new(String::new());
        assert_eq!(
            hasher().verify("password", &empty),
            Err(CredentialError::EmptyHash)
        );
    }

    #[test]
    fn hash_rejects_empty_and_short_input() {
        let err = hasher().hash("").unwrap_err();
        assert_eq!(err, CredentialError::EmptyCredential);
        assert_eq!(
            err.to_string(),
            "Credential must be a non-empty string"
        );

        let err = hasher().hash("Ab1!xyz").unwrap_err();
        assert_eq!(err, CredentialError::CredentialTooShort);
        assert_eq!(
            err.to_string(),
            "Credential must be at least 8 characters long"
        );
    }

    #[rstest]
    #[case("$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy", true)]
    #[case("$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy", true)]
    #[case("$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW", false)]
    #[case("$2b$14$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW", false)]
    #[case("", false)]
    #[case("not-a-valid-hash", false)]
    #[case("$9z$10$R9h/cIPz0gi.URNNX3kh2O", false)]
    #[case("$2b$xx$R9h/cIPz0gi.URNNX3kh2O", false)]
    #[case("$2b$10$", false)]
    fn needs_rehash_compares_the_embedded_cost(#[case] stored: &str, #[case] expected: bool) {
        let stored = HashedPassword::new(stored.to_string());
        assert_eq!(hasher().needs_rehash(&stored), expected);
    }

    #[test]
    fn verifying_a_lower_cost_hash_still_works_and_flags_rotation() {
        // simulate a hash persisted before the cost bump
        let old = HashedPassword::new(bcrypt::hash("Correct horse1!", 10).unwrap());
        assert!(hasher().verify("Correct horse1!", &old).unwrap());
        assert!(hasher().needs_rehash(&old));
    }
}
