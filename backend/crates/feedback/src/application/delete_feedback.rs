//! Delete Feedback Use Case

use std::sync::Arc;

use crate::domain::guard::{self, CurrentUser};
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::feedback_id::FeedbackId;
use crate::error::{FeedbackError, FeedbackResult};

/// Delete feedback use case
pub struct DeleteFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    feedback_repo: Arc<F>,
}

impl<F> DeleteFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback_repo: Arc<F>) -> Self {
        Self { feedback_repo }
    }

    /// Delete an owned entry
    pub async fn execute(
        &self,
        feedback_id: FeedbackId,
        current: &CurrentUser,
    ) -> FeedbackResult<()> {
        let feedback = self
            .feedback_repo
            .find_by_id(feedback_id)
            .await?
            .ok_or(FeedbackError::FeedbackNotFound)?;

        guard::require_owner(feedback.owner_id, current)?;

        self.feedback_repo.delete(feedback_id).await?;

        tracing::info!(
            feedback_id = %feedback_id,
            owner_id = %current.user_id,
            "Feedback deleted"
        );

        Ok(())
    }
}
