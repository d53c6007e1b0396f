//! Request Validation
//!
//! Field-level validation for incoming payloads, run before any use case.
//! Each function reports every failing field at once so clients can
//! render form errors in one pass.

use platform::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

use crate::domain::value_object::email::Email;
use crate::domain::value_object::feedback_title::FeedbackTitle;
use crate::domain::value_object::person_name::PersonName;
use crate::domain::value_object::user_name::UserName;
use crate::error::FeedbackError;
use crate::presentation::dto::{FeedbackRequest, LoginRequest, RegisterRequest};

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<Vec<FieldError>> for FeedbackError {
    fn from(errors: Vec<FieldError>) -> Self {
        let detail = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        FeedbackError::Validation(detail)
    }
}

/// Validate a registration payload
pub fn validate_register(req: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(e) = UserName::new(&req.user_name, None) {
        errors.push(FieldError::new("userName", e.to_string()));
    }
    if let Err(e) = Email::new(req.email.as_str()) {
        errors.push(FieldError::new("email", e.to_string()));
    }
    if let Err(e) = PersonName::new(&req.first_name) {
        errors.push(FieldError::new("firstName", e.to_string()));
    }
    if let Err(e) = PersonName::new(&req.last_name) {
        errors.push(FieldError::new("lastName", e.to_string()));
    }

    let password_chars = req.password.chars().count();
    if password_chars < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    } else if password_chars > MAX_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at most {MAX_PASSWORD_LENGTH} characters"),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a login payload
///
/// Presence checks only: the login response must not explain what
/// exactly was wrong with a credential.
pub fn validate_login(req: &LoginRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if req.user_name.trim().is_empty() {
        errors.push(FieldError::new("userName", "User name is required"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a feedback payload
pub fn validate_feedback(req: &FeedbackRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(e) = FeedbackTitle::new(&req.title) {
        errors.push(FieldError::new("title", e.to_string()));
    }
    if req.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_validate_register_ok() {
        assert!(validate_register(&register_request()).is_ok());
    }

    #[test]
    fn test_validate_register_collects_all_failures() {
        let req = RegisterRequest {
            user_name: "al".to_string(),
            email: "not-an-email".to_string(),
            first_name: "A".to_string(),
            last_name: "S".to_string(),
            password: "short".to_string(),
        };

        let errors = validate_register(&req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["userName", "email", "firstName", "lastName", "password"]
        );
    }

    #[test]
    fn test_validate_login_requires_both_fields() {
        let req = LoginRequest {
            user_name: "".to_string(),
            password: "".to_string(),
        };

        let errors = validate_login(&req).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_feedback() {
        let ok = FeedbackRequest {
            title: "Great app".to_string(),
            content: "Works well.".to_string(),
        };
        assert!(validate_feedback(&ok).is_ok());

        let bad = FeedbackRequest {
            title: "".to_string(),
            content: "   ".to_string(),
        };
        let errors = validate_feedback(&bad).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_field_errors_fold_into_validation_error() {
        let errors = vec![FieldError::new("title", "Title is required")];
        let err = FeedbackError::from(errors);
        assert!(matches!(err, FeedbackError::Validation(msg) if msg.contains("title")));
    }
}
