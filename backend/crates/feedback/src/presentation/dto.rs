//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::feedback::Feedback;
use crate::domain::entity::user::User;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i64,
    pub user_name: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: i64,
    pub user_name: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_name: Option<String>,
    pub expires_at_ms: Option<i64>,
}

// ============================================================================
// Users
// ============================================================================

/// Public user representation
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at_ms: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.as_i64(),
            user_name: user.user_name.original().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.as_str().to_string(),
            last_name: user.last_name.as_str().to_string(),
            created_at_ms: user.created_at.timestamp_millis(),
        }
    }
}

/// User profile response (user plus their feedback entries)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub user: UserResponse,
    pub feedback: Vec<FeedbackResponse>,
}

// ============================================================================
// Feedback
// ============================================================================

/// Create/update feedback request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub title: String,
    pub content: String,
}

/// Feedback entry response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub feedback_id: i64,
    pub title: String,
    pub content: String,
    pub owner_id: i64,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            feedback_id: feedback.feedback_id.as_i64(),
            title: feedback.title.as_str().to_string(),
            content: feedback.content.clone(),
            owner_id: feedback.owner_id.as_i64(),
            created_at_ms: feedback.created_at.timestamp_millis(),
            updated_at_ms: feedback.updated_at.timestamp_millis(),
        }
    }
}
