//! User Name Value Object
//!
//! Login identifier with a two-form representation:
//! - `original`: what the user typed (kept for display)
//! - `canonical`: NFKC-normalized, lowercased (used for uniqueness and lookup)
//!
//! Uniqueness is decided on the canonical form, so "Alice" and "alice"
//! are the same account.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Minimum user name length in characters
pub const USER_NAME_MIN_LENGTH: usize = 5;
/// Maximum user name length in characters
pub const USER_NAME_MAX_LENGTH: usize = 20;
/// Special characters allowed inside a user name
pub const ALLOWED_SPECIAL_CHARS: [char; 4] = ['_', '.', '-', '+'];

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    Empty,
    TooShort { length: usize, min: usize },
    TooLong { length: usize, max: usize },
    InvalidCharacter { character: char, position: usize },
    InvalidStart { character: char },
    InvalidEnd { character: char },
    ConsecutiveDots,
    NoAlphanumeric,
    ContainsWhitespace,
    Reserved { word: String },
}

impl std::fmt::Display for UserNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserNameError::Empty => write!(f, "User name cannot be empty"),
            UserNameError::TooShort { length, min } => {
                write!(f, "User name is too short ({length} chars, minimum {min})")
            }
            UserNameError::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            UserNameError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "User name contains invalid character '{character}' at position {position}"
                )
            }
            UserNameError::InvalidStart { character } => {
                write!(f, "User name cannot start with '{character}'")
            }
            UserNameError::InvalidEnd { character } => {
                write!(f, "User name cannot end with '{character}'")
            }
            UserNameError::ConsecutiveDots => {
                write!(f, "User name cannot contain consecutive dots")
            }
            UserNameError::NoAlphanumeric => {
                write!(f, "User name must contain at least one letter or digit")
            }
            UserNameError::ContainsWhitespace => {
                write!(f, "User name cannot contain whitespace")
            }
            UserNameError::Reserved { word } => {
                write!(f, "User name '{word}' is reserved")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// User name with original and canonical forms
///
/// Serializes as the original string; deserialization runs full validation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    /// As entered by the user (for display)
    original: String,
    /// NFKC-normalized, lowercased (for uniqueness and lookup)
    canonical: String,
}

impl UserName {
    /// Create a new user name with validation
    ///
    /// `reserved` overrides the default reserved word list; pass `None`
    /// to use the default.
    pub fn new(
        input: impl AsRef<str>,
        reserved: Option<&[&str]>,
    ) -> Result<Self, UserNameError> {
        let original = Self::normalize_original(input.as_ref());
        Self::validate(&original, reserved)?;

        let canonical = original.to_lowercase();

        Ok(Self {
            original,
            canonical,
        })
    }

    /// Create with a custom reserved word list
    pub fn new_with_reserved(
        input: impl AsRef<str>,
        reserved: &[&str],
    ) -> Result<Self, UserNameError> {
        Self::new(input, Some(reserved))
    }

    /// Reconstruct from a database value
    ///
    /// Applies the same validation as `new`; stored values are expected
    /// to pass it.
    pub fn from_db(input: &str) -> Result<Self, UserNameError> {
        Self::new(input, None)
    }

    /// Display form
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lookup form (NFKC, lowercase)
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Canonical form as a string slice
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Consume and return the original form
    pub fn into_inner(self) -> String {
        self.original
    }

    /// NFKC-normalize and trim surrounding whitespace
    fn normalize_original(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    fn validate(name: &str, reserved: Option<&[&str]>) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(UserNameError::ContainsWhitespace);
        }

        for (position, character) in name.chars().enumerate() {
            if !Self::is_valid_char(character) {
                return Err(UserNameError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }

        // Unwraps below are safe: the name is non-empty
        let first = name.chars().next().unwrap();
        if !Self::is_valid_start_end_char(first) {
            return Err(UserNameError::InvalidStart { character: first });
        }

        let last = name.chars().last().unwrap();
        if !Self::is_valid_start_end_char(last) {
            return Err(UserNameError::InvalidEnd { character: last });
        }

        if name.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        let reserved = reserved.unwrap_or(Self::default_reserved_words());
        if Self::is_reserved(name, reserved) {
            return Err(UserNameError::Reserved {
                word: name.to_lowercase(),
            });
        }

        Ok(())
    }

    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }

    fn is_valid_start_end_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Default reserved word list
    ///
    /// Only words that clear the minimum length matter here; anything
    /// shorter is rejected by the length check first.
    pub fn default_reserved_words() -> &'static [&'static str] {
        &[
            // Operational accounts
            "admin",
            "administrator",
            "moderator",
            "system",
            "support",
            "staff",
            // Route vocabulary
            "login",
            "logout",
            "register",
            "signup",
            "status",
            "password",
            // Resource names
            "users",
            "account",
            "profile",
            "settings",
            "feedback",
            // Catch-alls
            "about",
            "contact",
            "anonymous",
            "guest",
            "public",
        ]
    }

    fn is_reserved(name: &str, reserved: &[&str]) -> bool {
        let lowered = name.to_lowercase();
        reserved.iter().any(|word| *word == lowered)
    }
}

impl std::fmt::Debug for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value, None)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value, None)
    }
}

impl From<UserName> for String {
    fn from(user_name: UserName) -> Self {
        user_name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_canonical_is_lowercased() {
            let name = UserName::new("Alice", None).unwrap();
            assert_eq!(name.original(), "Alice");
            assert_eq!(name.canonical(), "alice");
        }

        #[test]
        fn test_nfkc_normalization() {
            // Fullwidth letter folds to its ASCII form
            let name = UserName::new("Ａlice", None).unwrap();
            assert_eq!(name.original(), "Alice");
            assert_eq!(name.canonical(), "alice");
        }

        #[test]
        fn test_surrounding_whitespace_trimmed() {
            let name = UserName::new("  alice  ", None).unwrap();
            assert_eq!(name.original(), "alice");
        }

        #[test]
        fn test_case_variants_share_canonical_form() {
            let lower = UserName::new("alice", None).unwrap();
            let upper = UserName::new("ALICE", None).unwrap();
            assert_eq!(lower.canonical(), upper.canonical());
        }
    }

    mod length_validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert_eq!(UserName::new("", None), Err(UserNameError::Empty));
            assert_eq!(UserName::new("   ", None), Err(UserNameError::Empty));
        }

        #[test]
        fn test_too_short_fails() {
            assert_eq!(
                UserName::new("abcd", None),
                Err(UserNameError::TooShort { length: 4, min: 5 })
            );
        }

        #[test]
        fn test_minimum_length_ok() {
            assert!(UserName::new("alice", None).is_ok());
        }

        #[test]
        fn test_maximum_length_ok() {
            let name = "a".repeat(20);
            assert!(UserName::new(&name, None).is_ok());
        }

        #[test]
        fn test_too_long_fails() {
            let name = "a".repeat(21);
            assert_eq!(
                UserName::new(&name, None),
                Err(UserNameError::TooLong {
                    length: 21,
                    max: 20
                })
            );
        }
    }

    mod character_validation {
        use super::*;

        #[test]
        fn test_allowed_special_chars() {
            assert!(UserName::new("alice_smith", None).is_ok());
            assert!(UserName::new("alice.smith", None).is_ok());
            assert!(UserName::new("alice-smith", None).is_ok());
            assert!(UserName::new("alice+work", None).is_ok());
        }

        #[test]
        fn test_invalid_character_fails() {
            assert_eq!(
                UserName::new("alice!", None),
                Err(UserNameError::InvalidCharacter {
                    character: '!',
                    position: 5
                })
            );
        }

        #[test]
        fn test_non_ascii_letters_fail() {
            assert!(matches!(
                UserName::new("日本語名前", None),
                Err(UserNameError::InvalidCharacter { .. })
            ));
        }

        #[test]
        fn test_emoji_fails() {
            assert!(matches!(
                UserName::new("alice🎉", None),
                Err(UserNameError::InvalidCharacter { .. })
            ));
        }

        #[test]
        fn test_inner_whitespace_fails() {
            assert_eq!(
                UserName::new("alice smith", None),
                Err(UserNameError::ContainsWhitespace)
            );
        }
    }

    mod position_validation {
        use super::*;

        #[test]
        fn test_cannot_start_with_dot() {
            assert_eq!(
                UserName::new(".alice", None),
                Err(UserNameError::InvalidStart { character: '.' })
            );
        }

        #[test]
        fn test_cannot_end_with_hyphen() {
            assert_eq!(
                UserName::new("alice-", None),
                Err(UserNameError::InvalidEnd { character: '-' })
            );
        }

        #[test]
        fn test_underscore_allowed_at_edges() {
            assert!(UserName::new("_alice", None).is_ok());
            assert!(UserName::new("alice_", None).is_ok());
        }
    }

    mod pattern_validation {
        use super::*;

        #[test]
        fn test_consecutive_dots_fail() {
            assert_eq!(
                UserName::new("ali..ce", None),
                Err(UserNameError::ConsecutiveDots)
            );
        }

        #[test]
        fn test_symbols_only_fails() {
            assert_eq!(
                UserName::new("_____", None),
                Err(UserNameError::NoAlphanumeric)
            );
        }
    }

    mod reserved_words {
        use super::*;

        #[test]
        fn test_reserved_word_fails() {
            assert_eq!(
                UserName::new("admin", None),
                Err(UserNameError::Reserved {
                    word: "admin".to_string()
                })
            );
        }

        #[test]
        fn test_reserved_check_is_case_insensitive() {
            assert!(matches!(
                UserName::new("ADMIN", None),
                Err(UserNameError::Reserved { .. })
            ));
        }

        #[test]
        fn test_custom_reserved_list() {
            let custom = &["alice"][..];
            assert!(matches!(
                UserName::new_with_reserved("alice", custom),
                Err(UserNameError::Reserved { .. })
            ));
            // Default reserved words no longer apply
            assert!(UserName::new_with_reserved("admin", custom).is_ok());
        }

        #[test]
        fn test_non_reserved_ok() {
            assert!(UserName::new("alice", None).is_ok());
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serializes_as_original() {
            let name = UserName::new("Alice", None).unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, r#""Alice""#);
        }

        #[test]
        fn test_deserialization_validates() {
            let ok: Result<UserName, _> = serde_json::from_str(r#""alice""#);
            assert!(ok.is_ok());

            let too_short: Result<UserName, _> = serde_json::from_str(r#""ab""#);
            assert!(too_short.is_err());
        }
    }

    mod display_and_debug {
        use super::*;

        #[test]
        fn test_display_uses_original() {
            let name = UserName::new("Alice", None).unwrap();
            assert_eq!(name.to_string(), "Alice");
        }

        #[test]
        fn test_debug_shows_both_forms() {
            let name = UserName::new("Alice", None).unwrap();
            let debug = format!("{:?}", name);
            assert!(debug.contains("Alice"));
            assert!(debug.contains("alice"));
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn test_try_from_str() {
            assert!(UserName::try_from("alice").is_ok());
            assert!(UserName::try_from("ab").is_err());
        }

        #[test]
        fn test_into_string_returns_original() {
            let name = UserName::new("Alice", None).unwrap();
            let s: String = name.into();
            assert_eq!(s, "Alice");
        }

        #[test]
        fn test_as_ref_is_canonical() {
            let name = UserName::new("Alice", None).unwrap();
            assert_eq!(name.as_ref(), "alice");
        }
    }

    mod error_messages {
        use super::*;

        #[test]
        fn test_messages_name_the_limit() {
            let err = UserName::new("abcd", None).unwrap_err();
            assert!(err.to_string().contains("minimum 5"));

            let err = UserName::new(&"a".repeat(21), None).unwrap_err();
            assert!(err.to_string().contains("maximum 20"));
        }
    }
}
