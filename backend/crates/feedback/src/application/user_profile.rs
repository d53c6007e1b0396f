//! User Profile Use Case
//!
//! Loads a user and their feedback entries for the profile view.

use std::sync::Arc;

use crate::domain::entity::feedback::Feedback;
use crate::domain::entity::user::User;
use crate::domain::repository::{FeedbackRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{FeedbackError, FeedbackResult};

/// User profile output
#[derive(Debug)]
pub struct UserProfileOutput {
    pub user: User,
    /// The user's entries, oldest first
    pub feedback: Vec<Feedback>,
}

/// User profile use case
pub struct UserProfileUseCase<U, F>
where
    U: UserRepository,
    F: FeedbackRepository,
{
    user_repo: Arc<U>,
    feedback_repo: Arc<F>,
}

impl<U, F> UserProfileUseCase<U, F>
where
    U: UserRepository,
    F: FeedbackRepository,
{
    pub fn new(user_repo: Arc<U>, feedback_repo: Arc<F>) -> Self {
        Self {
            user_repo,
            feedback_repo,
        }
    }

    /// Load a user by name together with their entries
    ///
    /// A malformed name cannot match any stored user, so it reports the
    /// same `UserNotFound` as a missing one.
    pub async fn execute(&self, user_name: &str) -> FeedbackResult<UserProfileOutput> {
        let user_name = UserName::new(user_name, None).map_err(|_| FeedbackError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(FeedbackError::UserNotFound)?;

        let feedback = self.feedback_repo.list_by_owner(user.user_id).await?;

        Ok(UserProfileOutput { user, feedback })
    }
}
