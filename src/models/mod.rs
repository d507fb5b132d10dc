//! Data models for Bookstore

pub mod book;
pub mod pagination;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookInput};
pub use pagination::{PageQuery, PageWindow};
pub use user::{NewUser, UpdateUser, User, UserInput};
