use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the authorization layer
///
/// The evaluator itself never fails; errors only arise at the HTTP guard
/// boundary (missing identity, denied access) and when loading a grants file.
#[derive(Error, Debug)]
pub enum AuthzError {
    #[error("authentication required")]
    Unauthorized,

    #[error("permission denied: {0}")]
    Forbidden(String),

    #[error("invalid grants configuration: {0}")]
    Config(String),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AuthzError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AuthzError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string())
            }
            AuthzError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            AuthzError::Config(msg) => {
                // Misconfiguration is an operator problem, not a caller problem
                tracing::error!(error = %msg, "Grants configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AuthzError::Internal(err) => {
                tracing::error!(error = ?err, "Internal authorization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for the authorization layer
pub type Result<T> = std::result::Result<T, AuthzError>;
