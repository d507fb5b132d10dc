//! Business logic services

pub mod books;
pub mod password;
pub mod users;

use std::sync::Arc;

use crate::repository::Repository;

pub use books::{BookCatalog, BooksService};
pub use users::{UserDirectory, UsersService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn BookCatalog>,
    pub users: Arc<dyn UserDirectory>,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: Arc::new(BooksService::new(Arc::new(repository.books))),
            users: Arc::new(UsersService::new(Arc::new(repository.users))),
        }
    }
}
