//! Authorization Guards
//!
//! Pure ownership checks over the authenticated caller. Handlers resolve
//! a [`CurrentUser`] from the session cookie first, then hand it to these
//! functions; authentication always precedes authorization.

use uuid::Uuid;

use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{FeedbackError, FeedbackResult};

/// The authenticated caller, resolved from a live session
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: UserName,
    pub session_id: Uuid,
}

/// Require that the caller owns the resource
pub fn require_owner(owner_id: UserId, current: &CurrentUser) -> FeedbackResult<()> {
    if owner_id == current.user_id {
        Ok(())
    } else {
        Err(FeedbackError::Forbidden)
    }
}

/// Require that the caller is the named user
///
/// Compares canonical forms, so case differences do not matter.
pub fn require_self(user_name: &UserName, current: &CurrentUser) -> FeedbackResult<()> {
    if user_name.canonical() == current.user_name.canonical() {
        Ok(())
    } else {
        Err(FeedbackError::Forbidden)
    }
}
