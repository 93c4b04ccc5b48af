use crate::auth::repo_types::{User, UserWithSecret};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, is_active, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by id. Used by the authentication gate to re-resolve
    /// token claims against the live record.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, is_active, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Find a user by email including the credential hash. Login only.
    pub async fn find_by_email_with_secret(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserWithSecret>, sqlx::Error> {
        sqlx::query_as::<_, UserWithSecret>(
            r#"
            SELECT id, email, is_active, role, created_at, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user holding the given reset token while its window is open.
    /// Expired or unknown tokens both come back as `None`.
    pub async fn find_by_reset_token(
        db: &PgPool,
        token: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, is_active, role, created_at
            FROM users
            WHERE reset_token = $1 AND reset_token_expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await
    }

    /// Create a user with a hashed password. Activation state and role
    /// fall back to the table defaults (inactive, `user`).
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, is_active, role, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Replace the credential hash.
    pub async fn set_password(db: &PgPool, id: Uuid, password_hash: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Replace the credential hash and close the reset window in one
    /// statement, so the token fields cannot survive a completed reset.
    pub async fn set_password_and_clear_reset(
        db: &PgPool,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, reset_token = NULL, reset_token_expires_at = NULL
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Open a reset window: both fields are written together.
    pub async fn set_reset_token(
        db: &PgPool,
        id: Uuid,
        token: &str,
        expires_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET reset_token = $2, reset_token_expires_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(token)
        .bind(expires_at)
        .execute(db)
        .await?;
        Ok(())
    }
}
