//! Feedback Error Types
//!
//! This module provides feedback-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Feedback-specific result type alias
pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// Feedback-specific error variants
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// User name already registered
    #[error("User name already exists")]
    UserNameTaken,

    /// Email already registered
    #[error("Email already exists")]
    EmailTaken,

    /// Feedback entry not found
    #[error("Feedback not found")]
    FeedbackNotFound,

    /// Login failed; deliberately silent about which part was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session token missing, malformed, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Caller does not own the resource
    #[error("You do not have permission to access this resource")]
    Forbidden,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeedbackError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeedbackError::UserNotFound => StatusCode::NOT_FOUND,
            FeedbackError::UserNameTaken => StatusCode::CONFLICT,
            FeedbackError::EmailTaken => StatusCode::CONFLICT,
            FeedbackError::FeedbackNotFound => StatusCode::NOT_FOUND,
            FeedbackError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            FeedbackError::SessionInvalid => StatusCode::UNAUTHORIZED,
            FeedbackError::Forbidden => StatusCode::FORBIDDEN,
            FeedbackError::Validation(_) => StatusCode::BAD_REQUEST,
            FeedbackError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            FeedbackError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FeedbackError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map to the unified error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedbackError::UserNotFound => ErrorKind::NotFound,
            FeedbackError::UserNameTaken => ErrorKind::Conflict,
            FeedbackError::EmailTaken => ErrorKind::Conflict,
            FeedbackError::FeedbackNotFound => ErrorKind::NotFound,
            FeedbackError::InvalidCredentials => ErrorKind::Unauthorized,
            FeedbackError::SessionInvalid => ErrorKind::Unauthorized,
            FeedbackError::Forbidden => ErrorKind::Forbidden,
            FeedbackError::Validation(_) => ErrorKind::BadRequest,
            FeedbackError::PasswordValidation(_) => ErrorKind::BadRequest,
            FeedbackError::Database(_) => ErrorKind::InternalServerError,
            FeedbackError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to the unified AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error at an appropriate level
    fn log(&self) {
        match self {
            FeedbackError::Database(e) => {
                tracing::error!(error = %e, "Database error");
            }
            FeedbackError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal error");
            }
            FeedbackError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            FeedbackError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Request failed");
            }
        }
    }
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Database errors go through the kernel's sqlx mapping so
            // pool exhaustion and friends keep their specific statuses
            FeedbackError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
