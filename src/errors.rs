use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Email already registered.")]
    DuplicateEmail,

    #[error("Username is taken.")]
    DuplicateUsername,

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::DuplicateEmail | AppError::DuplicateUsername => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Io(err) => {
                tracing::error!("storage I/O error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
            }
            AppError::Serialize(err) => {
                tracing::error!("storage serialization error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
            }
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
