//! Application Layer
//!
//! Use cases and application services.

pub mod add_feedback;
pub mod check_session;
pub mod config;
pub mod delete_account;
pub mod delete_feedback;
pub mod edit_feedback;
pub mod register;
pub mod session_token;
pub mod show_feedback;
pub mod sign_in;
pub mod sign_out;
pub mod user_profile;

// Re-exports
pub use add_feedback::{AddFeedbackInput, AddFeedbackUseCase};
pub use check_session::CheckSessionUseCase;
pub use config::FeedbackConfig;
pub use delete_account::DeleteAccountUseCase;
pub use delete_feedback::DeleteFeedbackUseCase;
pub use edit_feedback::{EditFeedbackInput, EditFeedbackUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use show_feedback::ShowFeedbackUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use user_profile::{UserProfileOutput, UserProfileUseCase};
