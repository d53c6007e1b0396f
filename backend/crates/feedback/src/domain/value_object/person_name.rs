//! Person Name Value Object
//!
//! First and last names. NFKC-normalized and trimmed; letters from any
//! script plus spaces, hyphens, and apostrophes.

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum name length in characters
pub const PERSON_NAME_MIN_LENGTH: usize = 3;
/// Maximum name length in characters
pub const PERSON_NAME_MAX_LENGTH: usize = 30;

/// Person name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonNameError {
    #[error("Name cannot be empty")]
    Empty,
    #[error("Name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },
    #[error("Name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
    #[error("Name contains invalid character '{character}'")]
    InvalidCharacter { character: char },
}

/// First or last name of a user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new person name with validation
    pub fn new(input: impl AsRef<str>) -> Result<Self, PersonNameError> {
        let normalized = input
            .as_ref()
            .nfkc()
            .collect::<String>()
            .trim()
            .to_string();

        if normalized.is_empty() {
            return Err(PersonNameError::Empty);
        }

        let length = normalized.chars().count();
        if length < PERSON_NAME_MIN_LENGTH {
            return Err(PersonNameError::TooShort {
                length,
                min: PERSON_NAME_MIN_LENGTH,
            });
        }
        if length > PERSON_NAME_MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                length,
                max: PERSON_NAME_MAX_LENGTH,
            });
        }

        if let Some(character) = normalized.chars().find(|c| !Self::is_valid_char(*c)) {
            return Err(PersonNameError::InvalidCharacter { character });
        }

        Ok(Self(normalized))
    }

    /// Reconstruct from a database value without re-validation
    pub fn from_db(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    fn is_valid_char(c: char) -> bool {
        c.is_alphabetic() || c == ' ' || c == '-' || c == '\''
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PersonName {
    type Error = PersonNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
