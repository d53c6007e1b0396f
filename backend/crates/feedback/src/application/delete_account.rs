//! Delete Account Use Case
//!
//! Removes a user and everything they own in one transaction.

use std::sync::Arc;

use crate::domain::guard::{self, CurrentUser};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{FeedbackError, FeedbackResult};

/// Delete account use case
pub struct DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteAccountUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Delete the named account with its feedback entries and sessions
    ///
    /// Only the account owner may do this; the ownership check runs
    /// before any store access.
    pub async fn execute(&self, user_name: &str, current: &CurrentUser) -> FeedbackResult<()> {
        let user_name = UserName::new(user_name, None).map_err(|_| FeedbackError::UserNotFound)?;

        guard::require_self(&user_name, current)?;

        let (feedback_deleted, sessions_deleted) =
            self.user_repo.delete_cascading(current.user_id).await?;

        tracing::info!(
            user_id = %current.user_id,
            feedback_deleted,
            sessions_deleted,
            "User account deleted"
        );

        Ok(())
    }
}
