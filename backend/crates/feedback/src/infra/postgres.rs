//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::feedback::{Feedback, NewFeedback};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{FeedbackRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, feedback_id::FeedbackId, feedback_title::FeedbackTitle,
    person_name::PersonName, user_id::UserId, user_name::UserName,
};
use crate::error::{FeedbackError, FeedbackResult};

/// PostgreSQL-backed feedback repository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Remove expired sessions
    ///
    /// Run at startup; the server keeps going even if this fails.
    pub async fn cleanup_expired(&self) -> FeedbackResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

/// Map a unique-constraint violation onto the field that caused it
fn map_insert_error(err: sqlx::Error) -> FeedbackError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("users_user_name_canonical_key") => FeedbackError::UserNameTaken,
                Some("users_email_key") => FeedbackError::EmailTaken,
                _ => FeedbackError::Database(err),
            };
        }
    }
    FeedbackError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgFeedbackRepository {
    async fn create(&self, user: &NewUser) -> FeedbackResult<User> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                user_name,
                user_name_canonical,
                email,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                user_id,
                user_name,
                user_name_canonical,
                email,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.email.as_str())
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> FeedbackResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                user_name_canonical,
                email,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> FeedbackResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                user_name_canonical,
                email,
                first_name,
                last_name,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_name_canonical = $1
            "#,
        )
        .bind(user_name.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn delete_cascading(&self, user_id: UserId) -> FeedbackResult<(u64, u64)> {
        let mut tx = self.pool.begin().await?;

        // Owned rows go first; the schema has no ON DELETE CASCADE, the
        // cascade is spelled out here so it shows up in one place
        let feedback_deleted = sqlx::query("DELETE FROM feedback WHERE owner_id = $1")
            .bind(user_id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let sessions_deleted = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if users_deleted == 0 {
            tx.rollback().await?;
            return Err(FeedbackError::UserNotFound);
        }

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            feedback_deleted,
            sessions_deleted,
            "User deleted with owned rows"
        );

        Ok((feedback_deleted, sessions_deleted))
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgFeedbackRepository {
    async fn create(&self, session: &Session) -> FeedbackResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                user_name,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_i64())
        .bind(session.user_name.original())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> FeedbackResult<Option<Session>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                user_name,
                expires_at_ms,
                created_at
            FROM sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> FeedbackResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> FeedbackResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

impl FeedbackRepository for PgFeedbackRepository {
    async fn create(&self, feedback: &NewFeedback) -> FeedbackResult<Feedback> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, FeedbackRow>(
            r#"
            INSERT INTO feedback (
                title,
                content,
                owner_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                feedback_id,
                title,
                content,
                owner_id,
                created_at,
                updated_at
            "#,
        )
        .bind(feedback.title.as_str())
        .bind(&feedback.content)
        .bind(feedback.owner_id.as_i64())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_feedback())
    }

    async fn find_by_id(&self, feedback_id: FeedbackId) -> FeedbackResult<Option<Feedback>> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT
                feedback_id,
                title,
                content,
                owner_id,
                created_at,
                updated_at
            FROM feedback
            WHERE feedback_id = $1
            "#,
        )
        .bind(feedback_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_feedback()))
    }

    async fn list_by_owner(&self, owner_id: UserId) -> FeedbackResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT
                feedback_id,
                title,
                content,
                owner_id,
                created_at,
                updated_at
            FROM feedback
            WHERE owner_id = $1
            ORDER BY feedback_id
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_feedback()).collect())
    }

    async fn update(&self, feedback: &Feedback) -> FeedbackResult<()> {
        sqlx::query(
            r#"
            UPDATE feedback SET
                title = $2,
                content = $3,
                updated_at = $4
            WHERE feedback_id = $1
            "#,
        )
        .bind(feedback.feedback_id.as_i64())
        .bind(feedback.title.as_str())
        .bind(&feedback.content)
        .bind(feedback.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, feedback_id: FeedbackId) -> FeedbackResult<()> {
        sqlx::query("DELETE FROM feedback WHERE feedback_id = $1")
            .bind(feedback_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    user_name: String,
    // Only used for lookups; the entity rebuilds it from user_name
    #[allow(dead_code)]
    user_name_canonical: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> FeedbackResult<User> {
        let user_name = UserName::from_db(&self.user_name)
            .map_err(|e| FeedbackError::Internal(format!("Invalid user_name: {}", e)))?;

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| FeedbackError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            user_name,
            email: Email::from_db(self.email),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: i64,
    user_name: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> FeedbackResult<Session> {
        let user_name = UserName::from_db(&self.user_name)
            .map_err(|e| FeedbackError::Internal(format!("Invalid user_name: {}", e)))?;

        Ok(Session {
            session_id: self.session_id,
            user_id: UserId::from_i64(self.user_id),
            user_name,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    feedback_id: i64,
    title: String,
    content: String,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn into_feedback(self) -> Feedback {
        Feedback {
            feedback_id: FeedbackId::from_i64(self.feedback_id),
            title: FeedbackTitle::from_db(self.title),
            content: self.content,
            owner_id: UserId::from_i64(self.owner_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
