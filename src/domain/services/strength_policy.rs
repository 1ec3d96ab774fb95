use thiserror::Error;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:'\"\\|,.<>/?";

/// Reason a candidate password was rejected. The `Display` strings are the
/// validation messages surfaced to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrengthViolation {
    #[error("required")]
    Required,
    #[error("too short")]
    TooShort,
    #[error("too long")]
    TooLong,
    #[error("missing lowercase")]
    MissingLowercase,
    #[error("missing uppercase")]
    MissingUppercase,
    #[error("missing digit")]
    MissingDigit,
    #[error("missing special character")]
    MissingSpecialCharacter,
}

/// Check a candidate password against the strength rules. Checks run in a
/// fixed order and the first violated rule is the one reported, so a short
/// all-lowercase candidate is "too short", not "missing uppercase".
pub fn validate_strength(candidate: &str) -> Result<(), StrengthViolation> {
    if candidate.is_empty() {
        return Err(StrengthViolation::Required);
    }

    let length = candidate.chars().count();
    if length < MIN_LENGTH {
        return Err(StrengthViolation::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(StrengthViolation::TooLong);
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(StrengthViolation::MissingLowercase);
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(StrengthViolation::MissingUppercase);
    }
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(StrengthViolation::MissingDigit);
    }
    if !candidate.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(StrengthViolation::MissingSpecialCharacter);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn accepts_a_password_meeting_every_rule() {
        assert_eq!(validate_strength("Password1!"), Ok(()));
    }

    #[rstest]
    #[case("", StrengthViolation::Required)]
    #[case("password1!", StrengthViolation::MissingUppercase)]
    #[case("PASSWORD1!", StrengthViolation::MissingLowercase)]
    #[case("Password!", StrengthViolation::MissingDigit)]
    #[case("Password1", StrengthViolation::MissingSpecialCharacter)]
    fn reports_the_violated_rule(#[case] candidate: &str, #[case] expected: StrengthViolation) {
        assert_eq!(validate_strength(candidate), Err(expected));
    }

    #[rstest]
    #[case("a")]
    #[case("A1!")]
    #[case("Abcde1!")] // 7 chars, otherwise fully compliant
    fn short_candidates_always_report_too_short(#[case] candidate: &str) {
        assert_eq!(validate_strength(candidate), Err(StrengthViolation::TooShort));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        // exactly 8
        assert_eq!(validate_strength("Abcdef1!"), Ok(()));

        // exactly 128
        let filler = "a".repeat(MAX_LENGTH - "Abcdef1!".len());
        let at_max = format!("Abcdef1!{filler}");
        assert_eq!(at_max.chars().count(), MAX_LENGTH);
        assert_eq!(validate_strength(&at_max), Ok(()));

        // 129
        let over = format!("{at_max}a");
        assert_eq!(validate_strength(&over), Err(StrengthViolation::TooLong));
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 7 characters, more than 8 bytes
        assert_eq!(
            validate_strength("Ab1!ééé"),
            Err(StrengthViolation::TooShort)
        );
    }

    #[test]
    fn ordering_prefers_length_over_character_classes() {
        // violates length, uppercase and special rules at once
        assert_eq!(validate_strength("abc1"), Err(StrengthViolation::TooShort));
    }

    #[rstest]
    #[case("Abcdefg1[")]
    #[case("Abcdefg1]")]
    #[case("Abcdefg1\\")]
    #[case("Abcdefg1\"")]
    #[case("Abcdefg1-")]
    fn every_listed_special_character_counts(#[case] candidate: &str) {
        assert_eq!(validate_strength(candidate), Ok(()));
    }

    #[test]
    fn unlisted_characters_do_not_satisfy_the_special_rule() {
        assert_eq!(
            validate_strength("Abcdefg1~"),
            Err(StrengthViolation::MissingSpecialCharacter)
        );
    }
}
