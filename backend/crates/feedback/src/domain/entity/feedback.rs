//! Feedback Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    feedback_id::FeedbackId, feedback_title::FeedbackTitle, user_id::UserId,
};

/// Feedback entry entity
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Store-assigned identifier
    pub feedback_id: FeedbackId,
    /// Entry title
    pub title: FeedbackTitle,
    /// Entry body (free text, no length cap)
    pub content: String,
    /// Owning user
    pub owner_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    /// Replace the title
    pub fn set_title(&mut self, title: FeedbackTitle) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Replace the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Feedback record before the store has assigned an ID
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub title: FeedbackTitle,
    pub content: String,
    pub owner_id: UserId,
}
