use crate::auth::AuthError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned for every malformed request; details stay in the logs
pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Language model failed: {0}")]
    Model(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(_) | ApiError::Model(_) => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST.to_string())
            }
            ApiError::Auth(AuthError::NotImplemented) => {
                (StatusCode::NOT_IMPLEMENTED, self.to_string())
            }
            ApiError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
        };
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
