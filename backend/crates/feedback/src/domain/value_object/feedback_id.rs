//! Feedback ID Value Object

use kernel::id::Id;

/// Marker type for feedback IDs
pub struct FeedbackMarker;

/// Store-assigned feedback entry identifier
pub type FeedbackId = Id<FeedbackMarker>;
