//! Repository layer for database operations

pub mod books;
pub mod users;

use sqlx::{Pool, Postgres};
use thiserror::Error;

pub use books::{BookStore, BooksRepository};
pub use users::{UserStore, UsersRepository};

/// Persistence failure as seen by the service layer.
///
/// A lookup that matched no row is reported as `NotFound`; every other
/// driver failure (connectivity, constraint violation) is `Database`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no rows in result set")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: BooksRepository,
    pub users: UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            users: UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create the `books` and `users` tables if they do not exist yet
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}
