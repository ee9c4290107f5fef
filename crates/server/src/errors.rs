use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
pub enum AppError {
    /// The effective Mealie configuration for a request failed validation.
    Config(Vec<String>),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Config(errors) => {
                let body = Json(json!({
                    "message": "Mealie configuration validation failed",
                    "errors": errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                let body = Json(json!({
                    "error": "An internal server error occurred.",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
