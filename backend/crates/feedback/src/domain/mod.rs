//! Domain Layer
//!
//! Entities, value objects, repository traits, and authorization guards.

pub mod entity;
pub mod guard;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{feedback::Feedback, session::Session, user::User};
pub use guard::CurrentUser;
pub use repository::{FeedbackRepository, SessionRepository, UserRepository};
