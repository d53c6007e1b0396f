//! Add Feedback Use Case

use std::sync::Arc;

use crate::domain::entity::feedback::{Feedback, NewFeedback};
use crate::domain::guard::CurrentUser;
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::feedback_title::FeedbackTitle;
use crate::error::{FeedbackError, FeedbackResult};

/// Add feedback input
pub struct AddFeedbackInput {
    pub title: String,
    pub content: String,
}

/// Add feedback use case
pub struct AddFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    feedback_repo: Arc<F>,
}

impl<F> AddFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback_repo: Arc<F>) -> Self {
        Self { feedback_repo }
    }

    /// Create an entry owned by the caller
    pub async fn execute(
        &self,
        input: AddFeedbackInput,
        current: &CurrentUser,
    ) -> FeedbackResult<Feedback> {
        let title = FeedbackTitle::new(&input.title)
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;

        if input.content.trim().is_empty() {
            return Err(FeedbackError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        // Ownership is structural: the record is created under the
        // caller's ID, never one taken from the request
        let new_feedback = NewFeedback {
            title,
            content: input.content,
            owner_id: current.user_id,
        };

        let feedback = self.feedback_repo.create(&new_feedback).await?;

        tracing::info!(
            feedback_id = %feedback.feedback_id,
            owner_id = %feedback.owner_id,
            "Feedback created"
        );

        Ok(feedback)
    }
}
