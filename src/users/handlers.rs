use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        extractors::AdminUser,
        password::{hash_password, validate_password},
        repo_types::User,
    },
    error::{parse_id, ApiError, ApiSuccess},
    state::AppState,
    users::dto::{CreateUserRequest, UpdateUserRequest},
    users::repo::{self, UserChanges},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state, _admin))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<ApiSuccess<Vec<User>>, ApiError> {
    let users = repo::list(&state.db).await?;
    Ok(ApiSuccess(StatusCode::OK, users))
}

#[instrument(skip(state, admin, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(payload): Json<CreateUserRequest>,
) -> Result<ApiSuccess<User>, ApiError> {
    if !validate_password(&payload.password, state.config.password_min_length) {
        return Err(ApiError::InvalidInput("Password is not valid.".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = repo::create(
        &state.db,
        &payload.email,
        &hash,
        payload.is_active,
        &payload.role,
    )
    .await?;

    info!(user_id = %user.id, admin_id = %admin.id, "user created by admin");
    Ok(ApiSuccess(StatusCode::CREATED, user))
}

#[instrument(skip(state, _admin))]
pub async fn get_user(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<User>, ApiError> {
    let id = parse_id(&id)?;
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User account could not be found.".into()))?;
    Ok(ApiSuccess(StatusCode::OK, user))
}

#[instrument(skip(state, admin, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<User>, ApiError> {
    let id = parse_id(&id)?;

    let password_hash = match payload.password {
        Some(ref password) => {
            if !validate_password(password, state.config.password_min_length) {
                return Err(ApiError::InvalidInput("Password is not valid.".into()));
            }
            Some(hash_password(password)?)
        }
        None => None,
    };

    let changes = UserChanges {
        email: payload.email,
        password_hash,
        is_active: payload.is_active,
        role: payload.role,
    };

    let updated = repo::update(&state.db, id, changes)
        .await?
        .ok_or_else(|| ApiError::NotFound("User account could not be found.".into()))?;

    info!(user_id = %updated.id, admin_id = %admin.id, "user updated by admin");
    Ok(ApiSuccess(StatusCode::OK, updated))
}

#[instrument(skip(state, admin))]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<User>, ApiError> {
    let id = parse_id(&id)?;
    let deleted = repo::delete(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User account could not be found.".into()))?;

    warn!(user_id = %deleted.id, admin_id = %admin.id, "user deleted by admin");
    Ok(ApiSuccess(StatusCode::OK, deleted))
}
