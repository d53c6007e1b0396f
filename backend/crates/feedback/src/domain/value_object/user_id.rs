//! User ID Value Object

use kernel::id::Id;

/// Marker type for user IDs
pub struct UserMarker;

/// Store-assigned user identifier
pub type UserId = Id<UserMarker>;
