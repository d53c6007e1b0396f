//! In-Memory Repository Implementation
//!
//! Backing store for tests and local development. A single lock guards
//! all three tables so multi-table operations (the account cascade,
//! uniqueness checks) are atomic from the caller's point of view.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::feedback::{Feedback, NewFeedback};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{FeedbackRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{feedback_id::FeedbackId, user_id::UserId, user_name::UserName};
use crate::error::{FeedbackError, FeedbackResult};

#[derive(Default)]
struct MemoryState {
    users: HashMap<i64, User>,
    sessions: HashMap<Uuid, Session>,
    feedback: HashMap<i64, Feedback>,
    next_user_id: i64,
    next_feedback_id: i64,
}

/// In-memory feedback repository
#[derive(Clone)]
pub struct InMemoryRepository {
    state: Arc<RwLock<MemoryState>>,
}

fn lock_poisoned() -> FeedbackError {
    FeedbackError::Internal("Repository lock poisoned".to_string())
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
        }
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.state.read().map(|s| s.users.len()).unwrap_or(0)
    }

    /// Number of stored sessions
    pub fn session_count(&self) -> usize {
        self.state.read().map(|s| s.sessions.len()).unwrap_or(0)
    }

    /// Number of stored feedback entries
    pub fn feedback_count(&self) -> usize {
        self.state.read().map(|s| s.feedback.len()).unwrap_or(0)
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryRepository {
    async fn create(&self, user: &NewUser) -> FeedbackResult<User> {
        // Check and insert run under one write lock, standing in for the
        // database unique constraints
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        if state
            .users
            .values()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(FeedbackError::UserNameTaken);
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(FeedbackError::EmailTaken);
        }

        state.next_user_id += 1;
        let now = Utc::now();
        let stored = User {
            user_id: UserId::from_i64(state.next_user_id),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.insert(stored.user_id.as_i64(), stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, user_id: UserId) -> FeedbackResult<Option<User>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state.users.get(&user_id.as_i64()).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> FeedbackResult<Option<User>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state
            .users
            .values()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn delete_cascading(&self, user_id: UserId) -> FeedbackResult<(u64, u64)> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        if state.users.remove(&user_id.as_i64()).is_none() {
            return Err(FeedbackError::UserNotFound);
        }

        let feedback_before = state.feedback.len();
        state.feedback.retain(|_, f| f.owner_id != user_id);
        let feedback_deleted = (feedback_before - state.feedback.len()) as u64;

        let sessions_before = state.sessions.len();
        state.sessions.retain(|_, s| s.user_id != user_id);
        let sessions_deleted = (sessions_before - state.sessions.len()) as u64;

        Ok((feedback_deleted, sessions_deleted))
    }
}

impl SessionRepository for InMemoryRepository {
    async fn create(&self, session: &Session) -> FeedbackResult<()> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;
        state.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> FeedbackResult<Option<Session>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state
            .sessions
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn delete(&self, session_id: Uuid) -> FeedbackResult<()> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;
        state.sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> FeedbackResult<u64> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        let before = state.sessions.len();
        state.sessions.retain(|_, s| !s.is_expired());

        Ok((before - state.sessions.len()) as u64)
    }
}

impl FeedbackRepository for InMemoryRepository {
    async fn create(&self, feedback: &NewFeedback) -> FeedbackResult<Feedback> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        state.next_feedback_id += 1;
        let now = Utc::now();
        let stored = Feedback {
            feedback_id: FeedbackId::from_i64(state.next_feedback_id),
            title: feedback.title.clone(),
            content: feedback.content.clone(),
            owner_id: feedback.owner_id,
            created_at: now,
            updated_at: now,
        };
        state
            .feedback
            .insert(stored.feedback_id.as_i64(), stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, feedback_id: FeedbackId) -> FeedbackResult<Option<Feedback>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(state.feedback.get(&feedback_id.as_i64()).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> FeedbackResult<Vec<Feedback>> {
        let state = self.state.read().map_err(|_| lock_poisoned())?;

        let mut entries: Vec<Feedback> = state
            .feedback
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        entries.sort_by_key(|f| f.feedback_id);

        Ok(entries)
    }

    async fn update(&self, feedback: &Feedback) -> FeedbackResult<()> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;

        match state.feedback.get_mut(&feedback.feedback_id.as_i64()) {
            Some(entry) => {
                *entry = feedback.clone();
                Ok(())
            }
            None => Err(FeedbackError::FeedbackNotFound),
        }
    }

    async fn delete(&self, feedback_id: FeedbackId) -> FeedbackResult<()> {
        let mut state = self.state.write().map_err(|_| lock_poisoned())?;
        state.feedback.remove(&feedback_id.as_i64());
        Ok(())
    }
}
