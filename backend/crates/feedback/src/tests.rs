//! Unit tests for the feedback crate
//!
//! Store-level behavior runs against the in-memory repository through
//! the real use cases.

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = FeedbackConfig::default();

        assert_eq!(config.session_cookie_name, "feedback_session");
        assert_eq!(config.session_ttl, Duration::from_secs(12 * 3600));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = FeedbackConfig::with_random_secret();
        let config2 = FeedbackConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = FeedbackConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_session_ttl_ms() {
        let config = FeedbackConfig::default();
        assert_eq!(config.session_ttl_ms(), 12 * 3600 * 1000);
    }

    #[test]
    fn test_cookie_config_follows_session_settings() {
        let config = FeedbackConfig::default();
        let cookie = config.cookie_config();

        assert_eq!(cookie.name, "feedback_session");
        assert!(cookie.secure);
        assert!(cookie.http_only);
        assert_eq!(cookie.max_age_secs, Some(12 * 3600));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{
            "userName": "alice",
            "email": "alice@example.com",
            "firstName": "Alice",
            "lastName": "Smith",
            "password": "password123"
        }"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.user_name, "alice");
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.first_name, "Alice");
        assert_eq!(request.last_name, "Smith");
    }

    #[test]
    fn test_feedback_response_uses_camel_case() {
        let response = FeedbackResponse {
            feedback_id: 3,
            title: "Great app".to_string(),
            content: "Works well.".to_string(),
            owner_id: 1,
            created_at_ms: 1_234_567_890_000,
            updated_at_ms: 1_234_567_890_000,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("feedbackId"));
        assert!(json.contains("ownerId"));
        assert!(json.contains("createdAtMs"));
        assert!(json.contains("updatedAtMs"));
    }

    #[test]
    fn test_user_response_has_no_password_fields() {
        let response = UserResponse {
            user_id: 1,
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            created_at_ms: 0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("userName"));
        assert!(!json.to_lowercase().contains("password"));
    }

    #[test]
    fn test_session_status_response_serialization() {
        let response = SessionStatusResponse {
            authenticated: false,
            user_name: None,
            expires_at_ms: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""authenticated":false"#));
    }
}

#[cfg(test)]
mod domain_tests {
    use chrono::Duration;

    use crate::domain::entity::feedback::Feedback;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::feedback_id::FeedbackId;
    use crate::domain::value_object::feedback_title::FeedbackTitle;
    use crate::domain::value_object::user_id::UserId;
    use crate::domain::value_object::user_name::UserName;

    #[test]
    fn test_session_expiry() {
        let name = UserName::new("alice", None).unwrap();

        let live = Session::new(UserId::from_i64(1), name.clone(), Duration::hours(12));
        assert!(!live.is_expired());

        let expired = Session::new(UserId::from_i64(1), name, Duration::milliseconds(-1));
        assert!(expired.is_expired());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let name = UserName::new("alice", None).unwrap();
        let a = Session::new(UserId::from_i64(1), name.clone(), Duration::hours(1));
        let b = Session::new(UserId::from_i64(1), name, Duration::hours(1));
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_feedback_edit_touches_updated_at() {
        let created = chrono::Utc::now() - Duration::hours(1);
        let mut feedback = Feedback {
            feedback_id: FeedbackId::from_i64(1),
            title: FeedbackTitle::new("Initial").unwrap(),
            content: "Initial content".to_string(),
            owner_id: UserId::from_i64(1),
            created_at: created,
            updated_at: created,
        };

        feedback.set_title(FeedbackTitle::new("Changed").unwrap());
        assert!(feedback.updated_at > created);
        assert_eq!(feedback.title.as_str(), "Changed");

        let after_title = feedback.updated_at;
        feedback.set_content("Changed content".to_string());
        assert!(feedback.updated_at >= after_title);
        assert_eq!(feedback.content, "Changed content");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::FeedbackError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(FeedbackError, StatusCode)> = vec![
            (FeedbackError::UserNotFound, StatusCode::NOT_FOUND),
            (FeedbackError::UserNameTaken, StatusCode::CONFLICT),
            (FeedbackError::EmailTaken, StatusCode::CONFLICT),
            (FeedbackError::FeedbackNotFound, StatusCode::NOT_FOUND),
            (FeedbackError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (FeedbackError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (FeedbackError::Forbidden, StatusCode::FORBIDDEN),
            (
                FeedbackError::Validation("bad input".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                FeedbackError::PasswordValidation("too short".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                FeedbackError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(
            FeedbackError::InvalidCredentials
                .to_string()
                .contains("credentials")
        );
        assert!(FeedbackError::UserNameTaken.to_string().contains("exists"));
        assert!(FeedbackError::Forbidden.to_string().contains("permission"));
    }
}

#[cfg(test)]
mod store_tests {
    use std::sync::Arc;

    use crate::application::config::FeedbackConfig;
    use crate::application::{
        AddFeedbackInput, AddFeedbackUseCase, CheckSessionUseCase, DeleteAccountUseCase,
        DeleteFeedbackUseCase, EditFeedbackInput, EditFeedbackUseCase, RegisterInput,
        RegisterOutput, RegisterUseCase, ShowFeedbackUseCase, SignInInput, SignInUseCase,
        SignOutUseCase, UserProfileUseCase,
    };
    use crate::domain::guard::CurrentUser;
    use crate::domain::repository::{SessionRepository, UserRepository};
    use crate::domain::value_object::user_name::UserName;
    use crate::error::FeedbackError;
    use crate::infra::memory::InMemoryRepository;

    fn test_config() -> Arc<FeedbackConfig> {
        Arc::new(FeedbackConfig::development())
    }

    fn register_input(user_name: &str, email: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            password: "password123".to_string(),
        }
    }

    async fn register(
        repo: &Arc<InMemoryRepository>,
        config: &Arc<FeedbackConfig>,
        user_name: &str,
        email: &str,
    ) -> RegisterOutput {
        RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(register_input(user_name, email))
            .await
            .unwrap()
    }

    async fn current_user_for(
        repo: &Arc<InMemoryRepository>,
        config: &Arc<FeedbackConfig>,
        token: &str,
    ) -> CurrentUser {
        CheckSessionUseCase::new(repo.clone(), config.clone())
            .current_user(token)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_creates_user_and_session() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let output = register(&repo, &config, "alice", "alice@example.com").await;

        assert_eq!(output.user_name, "alice");
        assert_eq!(repo.user_count(), 1);
        assert_eq!(repo.session_count(), 1);

        // The issued token resolves to the fresh account
        let current = current_user_for(&repo, &config, &output.session_token).await;
        assert_eq!(current.user_id.as_i64(), output.user_id);
    }

    #[tokio::test]
    async fn test_register_duplicate_user_name_keeps_single_user() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        register(&repo, &config, "alice", "alice@example.com").await;

        // Same name in different case collides on the canonical form
        let err = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(register_input("ALICE", "other@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, FeedbackError::UserNameTaken));
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_keeps_single_user() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        register(&repo, &config, "alice", "alice@example.com").await;

        let err = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(register_input("bobby", "alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, FeedbackError::EmailTaken));
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_round_trip() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let registered = register(&repo, &config, "alice", "alice@example.com").await;

        let output = SignInUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_id, registered.user_id);
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        register(&repo, &config, "alice", "alice@example.com").await;

        let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());

        // Wrong password for a known user
        let wrong_password = use_case
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "not-the-password".to_string(),
            })
            .await
            .unwrap_err();

        // Unknown user entirely
        let unknown_user = use_case
            .execute(SignInInput {
                user_name: "mallory".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, FeedbackError::InvalidCredentials));
        assert!(matches!(unknown_user, FeedbackError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_tampered_session_token_rejected() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let output = register(&repo, &config, "alice", "alice@example.com").await;

        let mut tampered = output.session_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let err = CheckSessionUseCase::new(repo.clone(), config.clone())
            .current_user(&tampered)
            .await
            .unwrap_err();

        assert!(matches!(err, FeedbackError::SessionInvalid));
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let output = register(&repo, &config, "alice", "alice@example.com").await;

        let use_case = SignOutUseCase::new(repo.clone(), config.clone());
        use_case.execute(&output.session_token).await.unwrap();
        assert_eq!(repo.session_count(), 0);

        // Second sign-out with the same token is still fine
        use_case.execute(&output.session_token).await.unwrap();

        // And the token no longer authenticates
        let err = CheckSessionUseCase::new(repo.clone(), config.clone())
            .current_user(&output.session_token)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::SessionInvalid));
    }

    #[tokio::test]
    async fn test_feedback_crud_round_trip() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let output = register(&repo, &config, "alice", "alice@example.com").await;
        let current = current_user_for(&repo, &config, &output.session_token).await;

        // Create
        let created = AddFeedbackUseCase::new(repo.clone())
            .execute(
                AddFeedbackInput {
                    title: "First".to_string(),
                    content: "First content".to_string(),
                },
                &current,
            )
            .await
            .unwrap();
        assert_eq!(created.owner_id, current.user_id);

        // Read
        let shown = ShowFeedbackUseCase::new(repo.clone())
            .execute(created.feedback_id, &current)
            .await
            .unwrap();
        assert_eq!(shown.title.as_str(), "First");

        // Update
        let edited = EditFeedbackUseCase::new(repo.clone())
            .execute(
                created.feedback_id,
                EditFeedbackInput {
                    title: "Revised".to_string(),
                    content: "Revised content".to_string(),
                },
                &current,
            )
            .await
            .unwrap();
        assert_eq!(edited.title.as_str(), "Revised");
        assert_eq!(edited.content, "Revised content");

        // Delete
        DeleteFeedbackUseCase::new(repo.clone())
            .execute(created.feedback_id, &current)
            .await
            .unwrap();

        let err = ShowFeedbackUseCase::new(repo.clone())
            .execute(created.feedback_id, &current)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::FeedbackNotFound));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_touch_foreign_feedback() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let alice = register(&repo, &config, "alice", "alice@example.com").await;
        let alice_user = current_user_for(&repo, &config, &alice.session_token).await;

        let bobby = register(&repo, &config, "bobby", "bobby@example.com").await;
        let bobby_user = current_user_for(&repo, &config, &bobby.session_token).await;

        let entry = AddFeedbackUseCase::new(repo.clone())
            .execute(
                AddFeedbackInput {
                    title: "Private note".to_string(),
                    content: "Only Alice may change this.".to_string(),
                },
                &alice_user,
            )
            .await
            .unwrap();

        // Read denied
        let err = ShowFeedbackUseCase::new(repo.clone())
            .execute(entry.feedback_id, &bobby_user)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Forbidden));

        // Edit denied
        let err = EditFeedbackUseCase::new(repo.clone())
            .execute(
                entry.feedback_id,
                EditFeedbackInput {
                    title: "Hijacked".to_string(),
                    content: "Changed".to_string(),
                },
                &bobby_user,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Forbidden));

        // Delete denied
        let err = DeleteFeedbackUseCase::new(repo.clone())
            .execute(entry.feedback_id, &bobby_user)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Forbidden));

        // Entry is unchanged
        let unchanged = ShowFeedbackUseCase::new(repo.clone())
            .execute(entry.feedback_id, &alice_user)
            .await
            .unwrap();
        assert_eq!(unchanged.title.as_str(), "Private note");
    }

    #[tokio::test]
    async fn test_user_profile_lists_entries_in_creation_order() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let output = register(&repo, &config, "alice", "alice@example.com").await;
        let current = current_user_for(&repo, &config, &output.session_token).await;

        for title in ["First", "Second", "Third"] {
            AddFeedbackUseCase::new(repo.clone())
                .execute(
                    AddFeedbackInput {
                        title: title.to_string(),
                        content: format!("{title} content"),
                    },
                    &current,
                )
                .await
                .unwrap();
        }

        let profile = UserProfileUseCase::new(repo.clone(), repo.clone())
            .execute("alice")
            .await
            .unwrap();

        let titles: Vec<&str> = profile.feedback.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_unknown_user_profile_not_found() {
        let repo = Arc::new(InMemoryRepository::new());

        let err = UserProfileUseCase::new(repo.clone(), repo.clone())
            .execute("nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::UserNotFound));

        // A name that fails validation reports the same error
        let err = UserProfileUseCase::new(repo.clone(), repo.clone())
            .execute("n!")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_account_cascades() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        let alice = register(&repo, &config, "alice", "alice@example.com").await;
        let alice_user = current_user_for(&repo, &config, &alice.session_token).await;

        let bobby = register(&repo, &config, "bobby", "bobby@example.com").await;
        let bobby_user = current_user_for(&repo, &config, &bobby.session_token).await;

        for current in [&alice_user, &alice_user, &bobby_user] {
            AddFeedbackUseCase::new(repo.clone())
                .execute(
                    AddFeedbackInput {
                        title: "Entry".to_string(),
                        content: "Some content".to_string(),
                    },
                    current,
                )
                .await
                .unwrap();
        }

        DeleteAccountUseCase::new(repo.clone())
            .execute("alice", &alice_user)
            .await
            .unwrap();

        // Alice, her entries, and her session are gone; Bobby's data stays
        assert_eq!(repo.user_count(), 1);
        assert_eq!(repo.feedback_count(), 1);
        assert_eq!(repo.session_count(), 1);

        let gone = UserRepository::find_by_user_name(&*repo, &UserName::new("alice", None).unwrap())
            .await
            .unwrap();
        assert!(gone.is_none());

        let err = CheckSessionUseCase::new(repo.clone(), config.clone())
            .current_user(&alice.session_token)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::SessionInvalid));
    }

    #[tokio::test]
    async fn test_delete_account_requires_self() {
        let repo = Arc::new(InMemoryRepository::new());
        let config = test_config();

        register(&repo, &config, "alice", "alice@example.com").await;
        let bobby = register(&repo, &config, "bobby", "bobby@example.com").await;
        let bobby_user = current_user_for(&repo, &config, &bobby.session_token).await;

        let err = DeleteAccountUseCase::new(repo.clone())
            .execute("alice", &bobby_user)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Forbidden));
        assert_eq!(repo.user_count(), 2);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_swept() {
        let repo = Arc::new(InMemoryRepository::new());

        let name = UserName::new("alice", None).unwrap();
        let expired = crate::domain::entity::session::Session::new(
            crate::domain::value_object::user_id::UserId::from_i64(1),
            name,
            chrono::Duration::milliseconds(-1),
        );
        SessionRepository::create(&*repo, &expired).await.unwrap();
        assert_eq!(repo.session_count(), 1);

        let swept = SessionRepository::cleanup_expired(&*repo).await.unwrap();
        assert_eq!(swept, 1);
        assert_eq!(repo.session_count(), 0);
    }
}
