//! Feedback Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, guards
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, validation, router
//!
//! ## Features
//! - User registration and login with user name + password
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - Feedback entries owned by their author (create/read/update/delete)
//! - Account deletion cascades to owned entries and sessions
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B length-only policy)
//! - The cookie carries a signed session ID, never user data
//! - Login failures are indistinguishable (no account enumeration)
//! - Every mutation checks ownership after authentication

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FeedbackConfig;
pub use error::{FeedbackError, FeedbackResult};
pub use infra::postgres::PgFeedbackRepository;
pub use presentation::router::feedback_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryRepository as MemoryStore;
    pub use crate::infra::postgres::PgFeedbackRepository as FeedbackStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
