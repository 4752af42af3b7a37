// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::StoreError;

/// Terminal request failure, converted straight into an HTTP response
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized (no credential presented)
    Unauthorized,

    // 403 Forbidden (credential presented but rejected)
    Forbidden(String),

    // 500 Internal Server Error, store failure with a fixed client message
    Storage {
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    pub const QUERY_FAILED: &'static str = "Database query failed";
    pub const INSERT_FAILED: &'static str = "Database insertion failed";

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-facing message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized => "Unauthorized",
            ApiError::Forbidden(msg) => msg,
            ApiError::Storage { message, .. } => message,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Storage { message, source } => json!({
                "message": message,
                "error": source.to_string(),
            }),
            _ => json!({ "message": self.message() }),
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn invalid_token() -> Self {
        ApiError::forbidden("Invalid or expired token")
    }

    /// Read failure; logged here so every call site reports it the same way
    pub fn query_failed(source: StoreError) -> Self {
        tracing::error!("Database query error: {}", source);
        ApiError::Storage { message: Self::QUERY_FAILED, source }
    }

    pub fn insert_failed(source: StoreError) -> Self {
        tracing::error!("Database insertion error: {}", source);
        ApiError::Storage { message: Self::INSERT_FAILED, source }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Storage { message, source } => write!(f, "{}: {}", message, source),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
