//! Sign Out Use Case

use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::application::session_token;
use crate::domain::repository::SessionRepository;
use crate::error::FeedbackResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<FeedbackConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<FeedbackConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// End the session behind a token
    ///
    /// Idempotent: an invalid or already-cleared token is not an error,
    /// the cookie gets cleared either way.
    pub async fn execute(&self, session_token: &str) -> FeedbackResult<()> {
        let Some(session_id) = session_token::verify(&self.config.session_secret, session_token)
        else {
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
