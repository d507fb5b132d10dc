//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{StoreError, StoreResult};
use crate::models::{Book, BookInput, PageWindow};

const BOOK_COLUMNS: &str =
    "id, title, authors, publisher, isbn, price, quantity, created_by, created_at";

/// Persistence operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(&self, data: &BookInput) -> StoreResult<Book>;

    /// Books ordered by id ascending; an empty page is not an error
    async fn list(&self, window: PageWindow) -> StoreResult<Vec<Book>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Book>;

    /// Replace every mutable field, keeping `id` and `created_at`
    async fn update(&self, id: i64, data: &BookInput) -> StoreResult<Book>;

    /// Deleting a missing id succeeds without touching any row
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn insert(&self, data: &BookInput) -> StoreResult<Book> {
        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, authors, publisher, isbn, price, quantity, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(&data.title)
        .bind(&data.authors)
        .bind(&data.publisher)
        .bind(&data.isbn)
        .bind(data.price)
        .bind(data.quantity)
        .bind(&data.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn list(&self, window: PageWindow) -> StoreResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Book> {
        sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i64, data: &BookInput) -> StoreResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET title = $1, authors = $2, publisher = $3, isbn = $4,
                price = $5, quantity = $6, created_by = $7
            WHERE id = $8
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(&data.title)
        .bind(&data.authors)
        .bind(&data.publisher)
        .bind(&data.isbn)
        .bind(data.price)
        .bind(data.quantity)
        .bind(&data.created_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
