use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

/// Successful response wrapped in the `{success, data}` envelope.
#[derive(Debug)]
pub struct ApiSuccess<T: Serialize>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (
            self.0,
            Json(json!({
                "success": true,
                "data": self.1,
            })),
        )
            .into_response()
    }
}

/// Domain failures, rendered at the boundary as `{success: false, data: {}, error}`.
///
/// Conflict renders as 400 rather than 409; unauthenticated and
/// unauthorized share a single 401 variant.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Unique values are required.")]
    Conflict,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!(error = %e, "internal error");
        }
        (
            self.status(),
            Json(json!({
                "success": false,
                "data": {},
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                ApiError::NotFound("The specified resource could not be found.".into())
            }
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::Conflict,
            other => ApiError::Internal(other.into()),
        }
    }
}

/// Malformed ids behave like missing resources, not bad input.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::NotFound("The specified resource could not be found.".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Conflict.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn conflict_message_is_fixed() {
        assert_eq!(ApiError::Conflict.to_string(), "Unique values are required.");
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "The specified resource could not be found."
        );
    }

    #[test]
    fn parse_id_rejects_malformed_as_not_found() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn responses_carry_the_mapped_status() {
        let resp = ApiError::Conflict.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiSuccess(StatusCode::CREATED, json!({"id": 1})).into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
