//! Sign In Use Case

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::FeedbackConfig;
use crate::application::session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{FeedbackError, FeedbackResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user_id: i64,
    pub user_name: String,
    /// Signed token for the session cookie
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<FeedbackConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<FeedbackConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate and open a session
    ///
    /// Every failure path collapses into `InvalidCredentials` so the
    /// response never reveals whether the user name exists.
    pub async fn execute(&self, input: SignInInput) -> FeedbackResult<SignInOutput> {
        let user_name =
            UserName::new(&input.user_name, None).map_err(|_| FeedbackError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(FeedbackError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| FeedbackError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(FeedbackError::InvalidCredentials);
        }

        if user.password_hash.needs_rehash() {
            tracing::debug!(user_id = %user.user_id, "Stored hash uses outdated parameters");
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| FeedbackError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::new(user.user_id, user.user_name.clone(), ttl);
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config.session_secret, &session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            user_id: user.user_id.as_i64(),
            user_name: user.user_name.original().to_string(),
            session_token,
        })
    }
}
