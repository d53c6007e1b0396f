//! Check Session Use Case
//!
//! Verifies the session cookie and resolves the authenticated caller.

use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::application::session_token;
use crate::domain::entity::session::Session;
use crate::domain::guard::CurrentUser;
use crate::domain::repository::SessionRepository;
use crate::error::{FeedbackError, FeedbackResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<FeedbackConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<FeedbackConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Fetch the live session behind a token
    ///
    /// Fails with `SessionInvalid` when the signature, the stored record,
    /// or its expiry does not check out. An expired record found here is
    /// deleted on the spot.
    pub async fn session(&self, session_token: &str) -> FeedbackResult<Session> {
        let session_id = session_token::verify(&self.config.session_secret, session_token)
            .ok_or(FeedbackError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(FeedbackError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(FeedbackError::SessionInvalid);
        }

        Ok(session)
    }

    /// Resolve the authenticated caller behind a token
    pub async fn current_user(&self, session_token: &str) -> FeedbackResult<CurrentUser> {
        let session = self.session(session_token).await?;

        Ok(CurrentUser {
            user_id: session.user_id,
            user_name: session.user_name,
            session_id: session.session_id,
        })
    }
}
