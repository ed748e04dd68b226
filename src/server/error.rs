use crate::cache::CacheError;
use crate::query::QueryError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced to API clients, rendered as the JSON error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    SourceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'static str,
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    pub fn not_found(what: &str, id: &str) -> ApiError {
        ApiError::NotFound(format!("{} '{}' not found", what, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SourceUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidQuery(_) => "invalid_query",
            ApiError::NotFound(_) => "not_found",
            ApiError::SourceUnavailable(_) => "source_unavailable",
            ApiError::Internal(_) => "internal",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::InvalidQuery(_) => "Invalid query",
            ApiError::NotFound(_) => "Not found",
            ApiError::SourceUnavailable(_) => "Catalogue unavailable",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            error!("Request failed: {}", self);
        }
        let message = self.to_string();
        let body = ErrorBody {
            success: false,
            error: self.title(),
            code: self.code(),
            message: &message,
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidQuery(msg) => ApiError::InvalidQuery(msg),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        ApiError::SourceUnavailable(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}
