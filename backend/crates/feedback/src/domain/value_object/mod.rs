//! Value Object Module

pub mod email;
pub mod feedback_id;
pub mod feedback_title;
pub mod person_name;
pub mod user_id;
pub mod user_name;
