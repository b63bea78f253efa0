/// Error types for note-smart
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Completion request timed out")]
    CompletionTimeout,

    #[error("Rate limit exceeded, wait a moment before trying again")]
    RateLimited,

    #[error("Invalid API key, check your credentials")]
    InvalidCredentials,

    #[error("Completion endpoint returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Map errors onto HTTP responses for the UI collaborator.
///
/// Extraction failures never reach this path; they are downgraded to
/// per-file diagnostics inside the pipeline.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::SERVICE_UNAVAILABLE,
            AppError::CompletionTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::InvalidCredentials | AppError::Api { .. } | AppError::Request(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
