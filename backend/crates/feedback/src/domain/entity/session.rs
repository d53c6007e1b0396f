//! Session Entity
//!
//! A server-side login session. The browser only ever holds a signed
//! token that references the session by ID.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Owning user
    pub user_id: UserId,
    /// User name at session creation (user names are immutable)
    pub user_name: UserName,
    /// Expiration as Unix timestamp in milliseconds
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded
    /// here.
    pub fn new(user_id: UserId, user_name: UserName, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            user_name,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check whether the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
