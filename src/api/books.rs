//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{
    extract::{JsonBody, PathParam, QueryParams},
    log_unexpected,
};
use crate::{
    error::AppResult,
    models::{Book, BookInput, PageQuery},
    AppState,
};

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<BookInput>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state
        .services
        .books
        .add_book(data)
        .await
        .map_err(log_unexpected("add_book"))?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List books ordered by id, one page at a time
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of books", body = Vec<Book>),
        (status = 400, description = "Invalid page parameters"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    QueryParams(page): QueryParams<PageQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let window = page.window()?;
    let books = state
        .services
        .books
        .list_books(window)
        .await
        .map_err(log_unexpected("list_books"))?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Non-numeric book ID"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .books
        .get_book(id)
        .await
        .map_err(log_unexpected("get_book"))?;
    Ok(Json(book))
}

/// Replace every mutable field of a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Non-numeric book ID or malformed body"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Storage failure, including a missing book")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(data): JsonBody<BookInput>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .books
        .update_book(id, data)
        .await
        .map_err(log_unexpected("update_book"))?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = String),
        (status = 400, description = "Non-numeric book ID"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<&'static str>> {
    state
        .services
        .books
        .delete_book(id)
        .await
        .map_err(log_unexpected("delete_book"))?;
    Ok(Json("Deleted Successfully"))
}
