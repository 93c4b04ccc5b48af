use crate::auth::repo_types::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Column values an admin update may touch. `None` leaves the stored
/// value in place.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<String>,
}

pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, is_active, role, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Admin creation with explicit activation state and role.
pub async fn create(
    db: &PgPool,
    email: &str,
    password_hash: &str,
    is_active: bool,
    role: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, is_active, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, is_active, role, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(is_active)
    .bind(role)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    changes: UserChanges,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            email = COALESCE($2, email),
            password_hash = COALESCE($3, password_hash),
            is_active = COALESCE($4, is_active),
            role = COALESCE($5, role)
        WHERE id = $1
        RETURNING id, email, is_active, role, created_at
        "#,
    )
    .bind(id)
    .bind(changes.email)
    .bind(changes.password_hash)
    .bind(changes.is_active)
    .bind(changes.role)
    .fetch_optional(db)
    .await
}

/// Immediate, irreversible delete; owned tasks go with the user.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        DELETE FROM users
        WHERE id = $1
        RETURNING id, email, is_active, role, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
