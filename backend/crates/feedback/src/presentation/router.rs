//! Feedback Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::domain::repository::{FeedbackRepository, SessionRepository, UserRepository};
use crate::infra::postgres::PgFeedbackRepository;
use crate::presentation::handlers::{self, FeedbackAppState};

/// Create the feedback router backed by PostgreSQL
pub fn feedback_router(repo: PgFeedbackRepository, config: FeedbackConfig) -> Router {
    let state = FeedbackAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/auth/register",
            post(handlers::register::<PgFeedbackRepository>),
        )
        .route("/auth/login", post(handlers::login::<PgFeedbackRepository>))
        .route(
            "/auth/logout",
            post(handlers::logout::<PgFeedbackRepository>),
        )
        .route(
            "/auth/status",
            get(handlers::session_status::<PgFeedbackRepository>),
        )
        .route(
            "/users/{user_name}",
            get(handlers::user_profile::<PgFeedbackRepository>)
                .delete(handlers::delete_account::<PgFeedbackRepository>),
        )
        .route(
            "/feedback",
            post(handlers::add_feedback::<PgFeedbackRepository>),
        )
        .route(
            "/feedback/{feedback_id}",
            get(handlers::show_feedback::<PgFeedbackRepository>)
                .put(handlers::edit_feedback::<PgFeedbackRepository>)
                .delete(handlers::delete_feedback::<PgFeedbackRepository>),
        )
        .with_state(state)
}

/// Create a feedback router over any repository implementation
///
/// Lets tests and alternative deployments plug in their own store.
pub fn feedback_router_generic<R>(repo: R, config: FeedbackConfig) -> Router
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = FeedbackAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .route("/auth/logout", post(handlers::logout::<R>))
        .route("/auth/status", get(handlers::session_status::<R>))
        .route(
            "/users/{user_name}",
            get(handlers::user_profile::<R>).delete(handlers::delete_account::<R>),
        )
        .route("/feedback", post(handlers::add_feedback::<R>))
        .route(
            "/feedback/{feedback_id}",
            get(handlers::show_feedback::<R>)
                .put(handlers::edit_feedback::<R>)
                .delete(handlers::delete_feedback::<R>),
        )
        .with_state(state)
}
