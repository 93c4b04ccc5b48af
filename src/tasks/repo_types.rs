use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Task record. `user_id` is stamped at creation and never changes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serialization() {
        let task = Task {
            id: Uuid::new_v4(),
            title: "water the plants".to_string(),
            user_id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("water the plants"));
        assert!(json.contains("user_id"));
    }
}
