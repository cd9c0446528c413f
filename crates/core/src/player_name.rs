//! Player names as typed by a human: at most 20 characters of `[A-Za-z0-9_]`.

use thiserror::Error;

pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,
    #[error("name is {0} characters long, the limit is {MAX_NAME_LEN}")]
    TooLong(usize),
    #[error("'{0}' is not allowed; use letters, digits and underscores")]
    InvalidChar(char),
}

/// Returns the trimmed name when it is acceptable.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong(len));
    }
    if let Some(bad) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(NameError::InvalidChar(bad));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn names_are_validated() {
        assert_eq!(validate_name("  Hero_1 \n"), Ok("Hero_1".to_string()));
        assert_eq!(validate_name("   "), Err(NameError::Empty));
        assert_eq!(validate_name(&"x".repeat(21)), Err(NameError::TooLong(21)));
        assert_eq!(validate_name(&"x".repeat(20)), Ok("x".repeat(20)));
        assert_eq!(validate_name("Bad Name"), Err(NameError::InvalidChar(' ')));
        assert_eq!(validate_name("semi;colon"), Err(NameError::InvalidChar(';')));
    }

    proptest! {
        #[test]
        fn accepted_names_are_short_and_plain(raw in "\\PC{0,30}") {
            if let Ok(name) = validate_name(&raw) {
                prop_assert!(!name.is_empty());
                prop_assert!(name.chars().count() <= MAX_NAME_LEN);
                prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            }
        }
    }
}
