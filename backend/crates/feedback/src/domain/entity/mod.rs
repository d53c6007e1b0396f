//! Entity Module

pub mod feedback;
pub mod session;
pub mod user;

pub use feedback::{Feedback, NewFeedback};
pub use session::Session;
pub use user::{NewUser, User};
