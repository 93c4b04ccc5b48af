use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::{
    auth::{jwt::JwtKeys, repo_types::User},
    error::ApiError,
    state::AppState,
};

const NOT_AUTHORIZED: &str = "User is not authorized to access this route.";

/// Authentication gate: resolves the bearer token to a live, active user.
///
/// The token only proves a prior login; the user is re-read from the
/// database on every request so deactivation or role changes take effect
/// immediately despite stateless tokens.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHORIZED.into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHORIZED.into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err(ApiError::Unauthorized(NOT_AUTHORIZED.into()));
            }
        };

        let user = User::find_by_id(&state.db, claims.sub).await?;
        match user {
            Some(user) if user.is_active => Ok(CurrentUser(user)),
            _ => {
                warn!(user_id = %claims.sub, "token resolved to missing or inactive user");
                Err(ApiError::Unauthorized(NOT_AUTHORIZED.into()))
            }
        }
    }
}

/// Authorization gate layered on [`CurrentUser`]: admin role required.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            warn!(user_id = %user.id, role = %user.role, "admin route denied");
            return Err(ApiError::Unauthorized(NOT_AUTHORIZED.into()));
        }
        Ok(AdminUser(user))
    }
}
