use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use serde_json::json;
use time::Duration as TimeDuration;
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{ForgotPasswordRequest, LoginRequest, PasswordRequest, RegisterRequest, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        password::{hash_password, validate_password, verify_password},
        repo_types::User,
        reset::generate_reset_token,
    },
    error::{ApiError, ApiSuccess},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/forgotpassword", post(forgot_password))
        .route("/auth/resetpassword/:resetToken", put(reset_password))
        .route("/auth/changepassword", put(change_password))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    // The unknown-email and wrong-password failures share one message so a
    // caller cannot tell which check failed.
    let record = User::find_by_email_with_secret(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::Unauthorized("Email and/or password are not valid.".into())
        })?;

    if !record.user.is_active {
        warn!(user_id = %record.user.id, "login on inactive account");
        return Err(ApiError::Unauthorized("User account is not active.".into()));
    }

    if !verify_password(&payload.password, &record.password_hash)? {
        warn!(user_id = %record.user.id, "login invalid password");
        return Err(ApiError::Unauthorized(
            "Email and/or password are not valid.".into(),
        ));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(record.user.id, &record.user.email, &record.user.role)?;

    info!(user_id = %record.user.id, "user logged in");
    Ok(ApiSuccess(StatusCode::OK, TokenResponse { token }))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    if !validate_password(&payload.password, state.config.password_min_length) {
        warn!("register rejected by password policy");
        return Err(ApiError::InvalidInput("Password is not valid.".into()));
    }

    let hash = hash_password(&payload.password)?;

    // A duplicate email surfaces as a unique violation from the store and
    // renders as a 400 Conflict.
    let user = User::create(&state.db, &payload.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(ApiSuccess(StatusCode::OK, json!({})))
}

#[instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User account could not be found.".into()))?;

    if !user.is_active {
        warn!(user_id = %user.id, "reset requested for inactive account");
        return Err(ApiError::Unauthorized(
            "User is not authorized to make this request.".into(),
        ));
    }

    let token = generate_reset_token();
    let expires_at =
        OffsetDateTime::now_utc() + TimeDuration::minutes(state.config.reset_ttl_minutes);
    User::set_reset_token(&state.db, user.id, &token, expires_at).await?;

    let link = format!(
        "{}/api/v1/auth/resetpassword/{}",
        state.config.public_base_url, token
    );
    let body = format!(
        "A request has been made to reset your password. \
         To reset your password, visit the following address:\n\n{}",
        link
    );
    state.mailer.send(&user.email, "Password Reset", &body).await?;

    info!(user_id = %user.id, "password reset email dispatched");
    Ok(ApiSuccess(StatusCode::OK, json!({})))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(reset_token): Path<String>,
    Json(payload): Json<PasswordRequest>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    let user = User::find_by_reset_token(&state.db, &reset_token)
        .await?
        .ok_or_else(|| {
            warn!("reset with invalid or expired token");
            ApiError::NotFound("The password reset token is either invalid or expired.".into())
        })?;

    if !validate_password(&payload.password, state.config.password_min_length) {
        return Err(ApiError::InvalidInput("Password is not valid.".into()));
    }

    let hash = hash_password(&payload.password)?;
    User::set_password_and_clear_reset(&state.db, user.id, &hash).await?;

    info!(user_id = %user.id, "password reset completed");
    Ok(ApiSuccess(StatusCode::OK, json!({})))
}

#[instrument(skip(state, user, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<PasswordRequest>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    if !validate_password(&payload.password, state.config.password_min_length) {
        return Err(ApiError::InvalidInput("Password is not valid.".into()));
    }

    let hash = hash_password(&payload.password)?;
    User::set_password(&state.db, user.id, &hash).await?;

    info!(user_id = %user.id, "password changed");
    Ok(ApiSuccess(StatusCode::OK, json!({})))
}
