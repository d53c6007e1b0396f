//! Edit Feedback Use Case

use std::sync::Arc;

use crate::domain::entity::feedback::Feedback;
use crate::domain::guard::{self, CurrentUser};
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::feedback_id::FeedbackId;
use crate::domain::value_object::feedback_title::FeedbackTitle;
use crate::error::{FeedbackError, FeedbackResult};

/// Edit feedback input
pub struct EditFeedbackInput {
    pub title: String,
    pub content: String,
}

/// Edit feedback use case
pub struct EditFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    feedback_repo: Arc<F>,
}

impl<F> EditFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback_repo: Arc<F>) -> Self {
        Self { feedback_repo }
    }

    /// Replace title and content of an owned entry
    pub async fn execute(
        &self,
        feedback_id: FeedbackId,
        input: EditFeedbackInput,
        current: &CurrentUser,
    ) -> FeedbackResult<Feedback> {
        let title = FeedbackTitle::new(&input.title)
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;

        if input.content.trim().is_empty() {
            return Err(FeedbackError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        let mut feedback = self
            .feedback_repo
            .find_by_id(feedback_id)
            .await?
            .ok_or(FeedbackError::FeedbackNotFound)?;

        guard::require_owner(feedback.owner_id, current)?;

        feedback.set_title(title);
        feedback.set_content(input.content);

        self.feedback_repo.update(&feedback).await?;

        tracing::info!(feedback_id = %feedback.feedback_id, "Feedback updated");

        Ok(feedback)
    }
}
