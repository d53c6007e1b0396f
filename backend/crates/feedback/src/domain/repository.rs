//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::feedback::{Feedback, NewFeedback};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{feedback_id::FeedbackId, user_id::UserId, user_name::UserName};
use crate::error::FeedbackResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; the store assigns the ID
    ///
    /// Uniqueness of user name and email is enforced by the store itself,
    /// never by a lookup-before-insert. Implementations map constraint
    /// violations to `UserNameTaken` / `EmailTaken`.
    async fn create(&self, user: &NewUser) -> FeedbackResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, user_id: UserId) -> FeedbackResult<Option<User>>;

    /// Find a user by name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> FeedbackResult<Option<User>>;

    /// Delete a user together with their feedback entries and sessions
    ///
    /// All three deletes happen in one transaction. Returns the number of
    /// feedback entries and sessions removed; fails with `UserNotFound`
    /// when the user row no longer exists.
    async fn delete_cascading(&self, user_id: UserId) -> FeedbackResult<(u64, u64)>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> FeedbackResult<()>;

    /// Find a session by ID
    ///
    /// Expired sessions are treated as absent.
    async fn find_by_id(&self, session_id: Uuid) -> FeedbackResult<Option<Session>>;

    /// Delete a session (no error when already gone)
    async fn delete(&self, session_id: Uuid) -> FeedbackResult<()>;

    /// Remove all expired sessions, returning how many were deleted
    async fn cleanup_expired(&self) -> FeedbackResult<u64>;
}

/// Feedback repository trait
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// Create a new feedback entry; the store assigns the ID
    async fn create(&self, feedback: &NewFeedback) -> FeedbackResult<Feedback>;

    /// Find a feedback entry by ID
    async fn find_by_id(&self, feedback_id: FeedbackId) -> FeedbackResult<Option<Feedback>>;

    /// List all entries owned by a user, oldest first
    async fn list_by_owner(&self, owner_id: UserId) -> FeedbackResult<Vec<Feedback>>;

    /// Persist an updated entry
    async fn update(&self, feedback: &Feedback) -> FeedbackResult<()>;

    /// Delete a feedback entry (no error when already gone)
    async fn delete(&self, feedback_id: FeedbackId) -> FeedbackResult<()>;
}
