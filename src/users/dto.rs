use serde::Deserialize;

fn default_role() -> String {
    "user".to_string()
}

/// Admin creation body: unlike self-registration, activation state and
/// role are settable by the caller.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default = "default_role")]
    pub role: String,
}

/// Allow-listed admin update body. Only these fields are mutable; anything
/// else in the request body is dropped at deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_inactive_user_role() {
        let body: CreateUserRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"123456"}"#).unwrap();
        assert!(!body.is_active);
        assert_eq!(body.role, "user");
    }

    #[test]
    fn update_ignores_unknown_fields() {
        let body: UpdateUserRequest = serde_json::from_str(
            r#"{"role":"admin","password_hash":"injected","id":"nope"}"#,
        )
        .unwrap();
        assert_eq!(body.role.as_deref(), Some("admin"));
        assert!(body.email.is_none());
        assert!(body.password.is_none());
    }
}
