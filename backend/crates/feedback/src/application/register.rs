//! Register Use Case
//!
//! Creates a new account and signs it in right away.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::FeedbackConfig;
use crate::application::session_token;
use crate::domain::entity::session::Session;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, person_name::PersonName, user_name::UserName};
use crate::error::{FeedbackError, FeedbackResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: i64,
    pub user_name: String,
    /// Signed token for the session cookie
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<FeedbackConfig>,
}

impl<U, S> RegisterUseCase<U, S>
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

    pub async fn execute(&self, input: RegisterInput) -> FeedbackResult<RegisterOutput> {
        let user_name = UserName::new(&input.user_name, None)
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;
        let email =
            Email::new(input.email).map_err(|e| FeedbackError::Validation(e.to_string()))?;
        let first_name = PersonName::new(&input.first_name)
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;
        let last_name = PersonName::new(&input.last_name)
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| FeedbackError::PasswordValidation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| FeedbackError::Internal(e.to_string()))?;

        // No lookup-before-insert: the store's unique constraints decide
        // who wins a registration race
        let new_user = NewUser::new(user_name, email, first_name, last_name, password_hash);
        let user = self.user_repo.create(&new_user).await?;

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| FeedbackError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::new(user.user_id, user.user_name.clone(), ttl);
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config.session_secret, &session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.as_i64(),
            user_name: user.user_name.original().to_string(),
            session_token,
        })
    }
}
