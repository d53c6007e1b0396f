//! Show Feedback Use Case
//!
//! Owner-gated single-entry fetch. Backs the edit form, which is why a
//! non-owner gets `Forbidden` instead of a public view.

use std::sync::Arc;

use crate::domain::entity::feedback::Feedback;
use crate::domain::guard::{self, CurrentUser};
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::feedback_id::FeedbackId;
use crate::error::{FeedbackError, FeedbackResult};

/// Show feedback use case
pub struct ShowFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    feedback_repo: Arc<F>,
}

impl<F> ShowFeedbackUseCase<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback_repo: Arc<F>) -> Self {
        Self { feedback_repo }
    }

    pub async fn execute(
        &self,
        feedback_id: FeedbackId,
        current: &CurrentUser,
    ) -> FeedbackResult<Feedback> {
        let feedback = self
            .feedback_repo
            .find_by_id(feedback_id)
            .await?
            .ok_or(FeedbackError::FeedbackNotFound)?;

        guard::require_owner(feedback.owner_id, current)?;

        Ok(feedback)
    }
}
