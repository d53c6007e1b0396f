//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgFeedbackRepository;
