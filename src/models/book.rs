//! Book model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Server-assigned identifier
    pub id: i64,
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub isbn: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub quantity: i64,
    pub created_by: String,
    /// Set once at insertion, never updated
    pub created_at: NaiveDateTime,
}

/// Create / update book request.
///
/// Every mutable field is replaced on update; `id` and `created_at` are not
/// part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub isbn: String,
    pub price: i64,
    pub quantity: i64,
    pub created_by: String,
}
