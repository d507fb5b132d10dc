//! Request middleware: shared-secret authentication and request logging

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use subtle::ConstantTimeEq;

use crate::{error::AppError, AppState};

/// Target of the one-event-per-request log lines
pub const REQUEST_LOG_TARGET: &str = "bookstore::request";

/// Reject any request whose bearer token differs from the configured secret
pub async fn require_access_token(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        tracing::warn!(uri = %request.uri(), "missing or malformed authorization header");
        return Err(AppError::Unauthorized(
            "Valid credential not provided".to_string(),
        ));
    };

    let expected = state.config.auth.access_token.as_bytes();
    if !bool::from(bearer.token().as_bytes().ct_eq(expected)) {
        tracing::warn!(uri = %request.uri(), "access token mismatch");
        return Err(AppError::Unauthorized(
            "Valid credential not provided".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

/// Emit one structured event per request; server errors are logged at error level
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let started = Instant::now();

    let response = next.run(request).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status();
    if status.is_server_error() {
        tracing::error!(
            target: REQUEST_LOG_TARGET,
            %method,
            %uri,
            status = status.as_u16(),
            latency_ms,
            content_type = content_type.as_deref(),
            "request error"
        );
    } else {
        tracing::info!(
            target: REQUEST_LOG_TARGET,
            %method,
            %uri,
            status = status.as_u16(),
            latency_ms,
            content_type = content_type.as_deref(),
            "request"
        );
    }

    response
}
