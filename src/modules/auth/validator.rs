use std::fmt;

use crate::{MAX_FIELD_LENGTH, MIN_FIELD_LENGTH, MIN_STRONG_PASSWORD_LENGTH, SPECIAL_CHARS};

/// Reasons a password fails the strength rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoNumber,
    NoSpecialChar,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::TooShort => write!(
                f,
                "at least {} characters",
                MIN_STRONG_PASSWORD_LENGTH
            ),
            PasswordError::NoUppercase => write!(f, "an uppercase letter"),
            PasswordError::NoLowercase => write!(f, "a lowercase letter"),
            PasswordError::NoNumber => write!(f, "a digit"),
            PasswordError::NoSpecialChar => write!(f, "one of {}", SPECIAL_CHARS),
        }
    }
}

/// Length rule shared by usernames and passwords
pub fn check_length(s: &str) -> bool {
    (MIN_FIELD_LENGTH..=MAX_FIELD_LENGTH).contains(&s.chars().count())
}

/// Only ASCII letters, digits and underscores
pub fn check_format(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Format rule for passwords: the username alphabet plus the special characters
/// the strength rule asks for.
pub fn check_password_format(password: &str) -> bool {
    password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c))
}

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Strength rule: upper, lower, digit, special character and a length of at least 8.
///
/// Independent of [`check_length`]; a 6 or 7 character password passes the
/// length rule and still fails here.
pub fn check_strength(password: &str) -> bool {
    validate_strength(password).is_ok()
}

/// Function to validate password strength, reporting the first unmet requirement
pub fn validate_strength(password: &str) -> Result<(), PasswordError> {
    match missing_requirements(password).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every requirement the password does not meet, in a fixed order
pub fn missing_requirements(password: &str) -> Vec<PasswordError> {
    let mut missing = Vec::new();
    if password.chars().count() < MIN_STRONG_PASSWORD_LENGTH {
        missing.push(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push(PasswordError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push(PasswordError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push(PasswordError::NoNumber);
    }
    if !password.chars().any(is_special) {
        missing.push(PasswordError::NoSpecialChar);
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        assert!(!check_length("abcde"));
        assert!(check_length("abcdef"));
        assert!(check_length(&"a".repeat(20)));
        assert!(!check_length(&"a".repeat(21)));
        assert!(!check_length(""));
    }

    #[test]
    fn test_format_rule() {
        assert!(check_format("alice_1"));
        assert!(check_format("ABC_xyz_09"));
        assert!(!check_format("alice-1"));
        assert!(!check_format("alice 1"));
        assert!(!check_format("alice:1"));
        assert!(!check_format("élise1"));
    }

    #[test]
    fn test_six_character_username_passes_length_and_format() {
        let username = "a_b_c1";
        assert!(check_length(username));
        assert!(check_format(username));
    }

    #[test]
    fn test_password_format_accepts_special_chars() {
        assert!(check_password_format("Passw0rd!"));
        assert!(check_password_format("NewPass1@"));
        assert!(check_password_format("a\"b'c\\d|e"));
        assert!(!check_password_format("Pass word1!"));
        assert!(!check_password_format("Passw0rd~"));
        assert!(!check_password_format("Pässw0rd!"));
    }

    #[test]
    fn test_strength_requires_special_char() {
        assert!(!check_strength("Abcdefg1"));
        assert!(check_strength("Abcdefg1!"));
    }

    #[test]
    fn test_strength_is_independent_of_length_rule() {
        // Seven characters satisfy the length rule but not the strength rule
        let password = "Abcd1!x";
        assert!(check_length(password));
        assert_eq!(validate_strength(password), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_strength_first_failure() {
        assert!(validate_strength("Password123!").is_ok());
        assert_eq!(
            validate_strength("password123!"),
            Err(PasswordError::NoUppercase)
        );
        assert_eq!(
            validate_strength("PASSWORD123!"),
            Err(PasswordError::NoLowercase)
        );
        assert_eq!(validate_strength("Password!"), Err(PasswordError::NoNumber));
        assert_eq!(
            validate_strength("Password123"),
            Err(PasswordError::NoSpecialChar)
        );
    }

    #[test]
    fn test_underscore_counts_as_special() {
        assert!(check_strength("Abcdefg_1"));
        assert!(check_format("Abcdefg_1"));
    }

    #[test]
    fn test_missing_requirements_lists_everything() {
        assert_eq!(
            missing_requirements("abc"),
            vec![
                PasswordError::TooShort,
                PasswordError::NoUppercase,
                PasswordError::NoNumber,
                PasswordError::NoSpecialChar,
            ]
        );
        assert!(missing_requirements("Abcdefg1!").is_empty());
    }
}
