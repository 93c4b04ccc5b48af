use crate::tasks::repo_types::Task;
use sqlx::PgPool;
use uuid::Uuid;

impl Task {
    /// All tasks owned by the given user.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, user_id, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, user_id, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, title: &str, user_id: Uuid) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, user_id)
            VALUES ($1, $2)
            RETURNING id, title, user_id, created_at
            "#,
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    pub async fn update_title(
        db: &PgPool,
        id: Uuid,
        title: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks SET title = $2
            WHERE id = $1
            RETURNING id, title, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            RETURNING id, title, user_id, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
