//! API handlers for Bookstore REST endpoints

pub mod books;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod openapi;
pub mod users;

use std::any::Any;

use axum::{
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Create the application router with all routes.
///
/// Everything except `/health` and the API docs sits behind the access token
/// check, including unknown paths.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        // Books
        .route("/books", post(books::add_book).get(books::list_books))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Users
        .route("/users", post(users::add_user))
        .route(
            "/users/:username",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Unknown paths get the token check too
        .fallback(route_not_found)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::require_access_token,
        ))
        // Public
        .route("/health", get(health::health_check))
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(from_fn(middleware::log_requests))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}

async fn route_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

/// Log errors that carry no service tag before they are turned into a 500.
///
/// Tagged service errors were already logged where they were raised.
pub(crate) fn log_unexpected(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        if let AppError::Unexpected(ref cause) = err {
            tracing::error!(operation, error = ?cause, "unexpected handler failure");
        }
        err
    }
}
