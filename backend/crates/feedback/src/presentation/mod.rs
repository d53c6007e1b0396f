//! Presentation Layer
//!
//! HTTP handlers, DTOs, request validation, and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod validate;

pub use handlers::FeedbackAppState;
pub use router::{feedback_router, feedback_router_generic};
