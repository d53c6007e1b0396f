//! User Entity

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_id::UserId, user_name::UserName,
};

/// User entity
///
/// One record per account. The password hash lives here; it never leaves
/// the backend (DTOs expose only public fields).
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Login and display name (unique, immutable)
    pub user_name: UserName,
    /// Email address (unique)
    pub email: Email,
    /// First name
    pub first_name: PersonName,
    /// Last name
    pub last_name: PersonName,
    /// Argon2id hash in PHC string format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// User record before the store has assigned an ID
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(
        user_name: UserName,
        email: Email,
        first_name: PersonName,
        last_name: PersonName,
        password_hash: HashedPassword,
    ) -> Self {
        Self {
            user_name,
            email,
            first_name,
            last_name,
            password_hash,
        }
    }
}
