//! # HTTP Errors
//!
//! Maps quote errors onto status codes and the `{"error": {...}}` envelope.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::quotes::QuoteError;

use super::response::ErrorEnvelope;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors rendered to HTTP clients
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Sorry, that's not allowed. Make sure you have the correct api_key.")]
    NotAuthorised,

    #[error("Sorry a quote with that id was not found in the database.")]
    QuoteNotFound,

    #[error("Sorry, we don't have any quotes by that author.")]
    AuthorNotFound,

    #[error("Sorry, there are no quotes in the database yet.")]
    EmptyCollection,

    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    /// Path, query string or form body that could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// Validation or storage failure; `action` reads like "add the new quote"
    #[error("Failed to {action}. Error: {cause}")]
    Failed { action: &'static str, cause: String },
}

impl ApiError {
    /// Convert a quote error raised while trying to `action`
    pub fn from_quote_error(action: &'static str, err: QuoteError) -> Self {
        if !err.is_client_error() {
            error!(action, error = %err, "Quote operation failed");
        }

        match err {
            QuoteError::Unauthorized => ApiError::NotAuthorised,
            QuoteError::NotFound(_) => ApiError::QuoteNotFound,
            QuoteError::AuthorNotFound(_) => ApiError::AuthorNotFound,
            QuoteError::EmptyCollection => ApiError::EmptyCollection,
            QuoteError::Validation(_) | QuoteError::Storage(_) => ApiError::Failed {
                action,
                cause: err.to_string(),
            },
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAuthorised => StatusCode::FORBIDDEN,
            ApiError::QuoteNotFound | ApiError::AuthorNotFound | ApiError::EmptyCollection => {
                StatusCode::NOT_FOUND
            }
            ApiError::MissingParam(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key inside the error envelope
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::NotAuthorised => "Not Authorised",
            ApiError::QuoteNotFound | ApiError::AuthorNotFound | ApiError::EmptyCollection => {
                "Not Found"
            }
            ApiError::MissingParam(_) | ApiError::BadRequest(_) => "Bad Request",
            ApiError::Failed { .. } => "Message",
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::new(self.category(), self.to_string()));
        (status, body).into_response()
    }
}
