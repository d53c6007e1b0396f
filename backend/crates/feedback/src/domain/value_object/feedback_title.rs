//! Feedback Title Value Object

use thiserror::Error;

/// Maximum title length in characters
pub const FEEDBACK_TITLE_MAX_LENGTH: usize = 100;

/// Title validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackTitleError {
    #[error("Title cannot be empty")]
    Empty,
    #[error("Title is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
}

/// Title of a feedback entry
///
/// Free text, trimmed, 1 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackTitle(String);

impl FeedbackTitle {
    /// Create a new title with validation
    pub fn new(input: impl AsRef<str>) -> Result<Self, FeedbackTitleError> {
        let trimmed = input.as_ref().trim().to_string();

        if trimmed.is_empty() {
            return Err(FeedbackTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > FEEDBACK_TITLE_MAX_LENGTH {
            return Err(FeedbackTitleError::TooLong {
                length,
                max: FEEDBACK_TITLE_MAX_LENGTH,
            });
        }

        Ok(Self(trimmed))
    }

    /// Reconstruct from a database value without re-validation
    pub fn from_db(input: impl Into<String>) -> Self {
        Self(input.into())
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

impl std::fmt::Display for FeedbackTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FeedbackTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        let title = FeedbackTitle::new("Great service").unwrap();
        assert_eq!(title.as_str(), "Great service");
    }

    #[test]
    fn test_trims_whitespace() {
        let title = FeedbackTitle::new("  Great service  ").unwrap();
        assert_eq!(title.as_str(), "Great service");
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(FeedbackTitle::new(""), Err(FeedbackTitleError::Empty));
        assert_eq!(FeedbackTitle::new("   "), Err(FeedbackTitleError::Empty));
    }

    #[test]
    fn test_max_length_boundary() {
        assert!(FeedbackTitle::new("a".repeat(100)).is_ok());
        assert_eq!(
            FeedbackTitle::new("a".repeat(101)),
            Err(FeedbackTitleError::TooLong {
                length: 101,
                max: 100
            })
        );
    }

    #[test]
    fn test_unicode_counted_by_chars() {
        // 100 multibyte characters still fit
        assert!(FeedbackTitle::new("あ".repeat(100)).is_ok());
    }
}
