//! Book catalog service

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::{AppResult, ServiceError},
    models::{Book, BookInput, PageWindow},
    repository::{BookStore, StoreError},
};

/// Book operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalog: Send + Sync {
    async fn add_book(&self, data: BookInput) -> AppResult<Book>;

    async fn list_books(&self, window: PageWindow) -> AppResult<Vec<Book>>;

    async fn get_book(&self, id: i64) -> AppResult<Book>;

    async fn update_book(&self, id: i64, data: BookInput) -> AppResult<Book>;

    async fn delete_book(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

fn log_store_error(operation: &'static str, err: &StoreError) {
    tracing::error!(entity = "book", operation, error = %err, "book store operation failed");
}

#[async_trait]
impl BookCatalog for BooksService {
    async fn add_book(&self, data: BookInput) -> AppResult<Book> {
        self.store.insert(&data).await.map_err(|e| {
            log_store_error("insert", &e);
            ServiceError::internal("Error AddBook Service", e).into()
        })
    }

    async fn list_books(&self, window: PageWindow) -> AppResult<Vec<Book>> {
        self.store.list(window).await.map_err(|e| {
            log_store_error("list", &e);
            ServiceError::internal("Error ListBooks Service", e).into()
        })
    }

    async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.store.get_by_id(id).await.map_err(|e| {
            log_store_error("get_by_id", &e);
            let err = match e {
                StoreError::NotFound => ServiceError::not_found("Error Book Not Found", e),
                _ => ServiceError::internal("Error GetBook Service", e),
            };
            err.into()
        })
    }

    // A missing id is not singled out here: it surfaces as 500 like any
    // other store failure, unlike `get_book`.
    async fn update_book(&self, id: i64, data: BookInput) -> AppResult<Book> {
        self.store.update(id, &data).await.map_err(|e| {
            log_store_error("update", &e);
            ServiceError::internal("Error UpdateBook Service", e).into()
        })
    }

    async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await.map_err(|e| {
            log_store_error("delete", &e);
            ServiceError::internal("Error DeleteBook Service", e).into()
        })
    }
}
