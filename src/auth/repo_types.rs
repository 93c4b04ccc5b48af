use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record as exposed to the rest of the application.
///
/// The credential hash is deliberately not part of this type; operations
/// that need it fetch a [`UserWithSecret`] instead, so a user can never
/// leak its hash through serialization.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub role: String,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// User record together with its credential hash, fetched only where a
/// password has to be verified.
#[derive(Debug, FromRow)]
pub struct UserWithSecret {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_carries_no_secret() {
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            is_active: true,
            role: "user".to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn admin_role_check() {
        let mut user = User {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            is_active: true,
            role: "admin".to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        assert!(user.is_admin());
        user.role = "user".to_string();
        assert!(!user.is_admin());
    }
}
