//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::FeedbackConfig;
use crate::application::{
    AddFeedbackInput, AddFeedbackUseCase, CheckSessionUseCase, DeleteAccountUseCase,
    DeleteFeedbackUseCase, EditFeedbackInput, EditFeedbackUseCase, RegisterInput, RegisterUseCase,
    ShowFeedbackUseCase, SignInInput, SignInUseCase, SignOutUseCase, UserProfileUseCase,
};
use crate::domain::guard::CurrentUser;
use crate::domain::repository::{FeedbackRepository, SessionRepository, UserRepository};
use crate::domain::value_object::feedback_id::FeedbackId;
use crate::error::{FeedbackError, FeedbackResult};
use crate::presentation::dto::{
    FeedbackRequest, FeedbackResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, SessionStatusResponse, UserProfileResponse, UserResponse,
};
use crate::presentation::validate;

/// Shared state for feedback handlers
#[derive(Clone)]
pub struct FeedbackAppState<R>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<FeedbackConfig>,
}

/// POST /api/auth/register
///
/// Creates an account and signs it in: the response carries the session
/// cookie.
pub async fn register<R>(
    State(state): State<FeedbackAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> FeedbackResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    validate::validate_register(&req)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        user_name: req.user_name,
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(RegisterResponse {
            user_id: output.user_id,
            user_name: output.user_name,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<FeedbackAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> FeedbackResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    validate::validate_login(&req)?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.user_name,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = build_session_cookie(&state.config, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            user_id: output.user_id,
            user_name: output.user_name,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Always succeeds; the session cookie is cleared whether or not the
/// token still referenced a live session.
pub async fn logout<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
) -> FeedbackResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = build_clear_cookie(&state.config);

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
) -> FeedbackResult<Json<SessionStatusResponse>>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.session(&token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            user_name: Some(session.user_name.original().to_string()),
            expires_at_ms: Some(session.expires_at_ms),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            user_name: None,
            expires_at_ms: None,
        })),
    }
}

/// GET /api/users/{user_name}
pub async fn user_profile<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Path(user_name): Path<String>,
) -> FeedbackResult<Json<UserProfileResponse>>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    // Profiles are visible to any signed-in user
    let _current = authenticate(&state, &headers).await?;

    let use_case = UserProfileUseCase::new(state.repo.clone(), state.repo.clone());
    let output = use_case.execute(&user_name).await?;

    Ok(Json(UserProfileResponse {
        user: UserResponse::from(&output.user),
        feedback: output.feedback.iter().map(FeedbackResponse::from).collect(),
    }))
}

/// DELETE /api/users/{user_name}
pub async fn delete_account<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Path(user_name): Path<String>,
) -> FeedbackResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let current = authenticate(&state, &headers).await?;

    let use_case = DeleteAccountUseCase::new(state.repo.clone());
    use_case.execute(&user_name, &current).await?;

    // The caller's session went down with the account
    let cookie = build_clear_cookie(&state.config);

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

/// POST /api/feedback
pub async fn add_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<FeedbackRequest>,
) -> FeedbackResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let current = authenticate(&state, &headers).await?;

    validate::validate_feedback(&req)?;

    let use_case = AddFeedbackUseCase::new(state.repo.clone());
    let input = AddFeedbackInput {
        title: req.title,
        content: req.content,
    };

    let feedback = use_case.execute(input, &current).await?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))))
}

/// GET /api/feedback/{feedback_id}
pub async fn show_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Path(feedback_id): Path<i64>,
) -> FeedbackResult<Json<FeedbackResponse>>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let current = authenticate(&state, &headers).await?;

    let use_case = ShowFeedbackUseCase::new(state.repo.clone());
    let feedback = use_case
        .execute(FeedbackId::from_i64(feedback_id), &current)
        .await?;

    Ok(Json(FeedbackResponse::from(&feedback)))
}

/// PUT /api/feedback/{feedback_id}
pub async fn edit_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Path(feedback_id): Path<i64>,
    Json(req): Json<FeedbackRequest>,
) -> FeedbackResult<Json<FeedbackResponse>>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let current = authenticate(&state, &headers).await?;

    validate::validate_feedback(&req)?;

    let use_case = EditFeedbackUseCase::new(state.repo.clone());
    let input = EditFeedbackInput {
        title: req.title,
        content: req.content,
    };

    let feedback = use_case
        .execute(FeedbackId::from_i64(feedback_id), input, &current)
        .await?;

    Ok(Json(FeedbackResponse::from(&feedback)))
}

/// DELETE /api/feedback/{feedback_id}
pub async fn delete_feedback<R>(
    State(state): State<FeedbackAppState<R>>,
    headers: HeaderMap,
    Path(feedback_id): Path<i64>,
) -> FeedbackResult<StatusCode>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let current = authenticate(&state, &headers).await?;

    let use_case = DeleteFeedbackUseCase::new(state.repo.clone());
    use_case
        .execute(FeedbackId::from_i64(feedback_id), &current)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the authenticated caller or fail with 401
async fn authenticate<R>(
    state: &FeedbackAppState<R>,
    headers: &HeaderMap,
) -> FeedbackResult<CurrentUser>
where
    R: UserRepository + SessionRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(headers, &state.config.session_cookie_name)
        .ok_or(FeedbackError::SessionInvalid)?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    use_case.current_user(&token).await
}

/// Extract the session token from the request cookies
fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}

/// Build the Set-Cookie value carrying a session token
fn build_session_cookie(config: &FeedbackConfig, token: &str) -> String {
    config.cookie_config().build_set_cookie(token)
}

/// Build the Set-Cookie value that clears the session cookie
fn build_clear_cookie(config: &FeedbackConfig) -> String {
    config.cookie_config().build_delete_cookie()
}
