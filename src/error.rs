//! Error types for the Bookstore server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Classification of a service failure, decoupled from the store's error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status().as_u16())
    }
}

/// Tagged error emitted by the service layer.
///
/// Carries the status classification and a short remark; the underlying cause
/// is kept for logs and never rendered to clients.
#[derive(Error, Debug)]
#[error("{kind} : {remark}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub remark: &'static str,
    #[source]
    pub source: Option<BoxError>,
}

impl ServiceError {
    pub fn not_found(remark: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            remark,
            source: Some(source.into()),
        }
    }

    pub fn internal(remark: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            remark,
            source: Some(source.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Service(err) => err.status(),
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// Failures never carry a payload: the status code is the whole answer.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
