//! Repository tests against a real PostgreSQL database

use bookstore_server::{
    models::{BookInput, NewUser, PageWindow, UpdateUser},
    repository::{BookStore, BooksRepository, StoreError, UserStore, UsersRepository},
};
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::common::{random_email, random_fullname, random_password, random_username};

fn book_input(title: &str) -> BookInput {
    BookInput {
        title: title.to_string(),
        authors: vec!["A".to_string(), "B".to_string()],
        publisher: "P".to_string(),
        isbn: "123".to_string(),
        price: 100,
        quantity: 5,
        created_by: "admin".to_string(),
    }
}

fn new_user() -> NewUser {
    NewUser {
        username: random_username(),
        email: random_email(),
        fullname: random_fullname(),
        hashed_password: random_password(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_insert_then_get_book(pool: PgPool) {
    // TIMESTAMP columns hold the server's local time, so read the clock from the database
    let before: NaiveDateTime = sqlx::query_scalar("SELECT NOW()::timestamp")
        .fetch_one(&pool)
        .await
        .unwrap();
    let repo = BooksRepository::new(pool);

    let inserted = repo.insert(&book_input("T")).await.unwrap();
    assert!(inserted.id > 0);
    assert!(inserted.created_at >= before);

    let fetched = repo.get_by_id(inserted.id).await.unwrap();
    assert_eq!(fetched, inserted);
    assert_eq!(fetched.authors, vec!["A".to_string(), "B".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_ids_are_never_reused(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    let first = repo.insert(&book_input("one")).await.unwrap();
    repo.delete(first.id).await.unwrap();
    let second = repo.insert(&book_input("two")).await.unwrap();
    assert!(second.id > first.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_get_missing_book(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    assert!(matches!(repo.get_by_id(123_456).await, Err(StoreError::NotFound)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_list_books_is_ordered_and_limited(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    for i in 0..5 {
        repo.insert(&book_input(&format!("book {i}"))).await.unwrap();
    }

    let page = repo.list(PageWindow { limit: 3, offset: 1 }).await.unwrap();
    assert_eq!(page.len(), 3);
    assert!(page.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(page[0].title, "book 1");

    let empty = repo.list(PageWindow { limit: 3, offset: 100 }).await.unwrap();
    assert!(empty.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_book_keeps_id_and_creation_time(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    let original = repo.insert(&book_input("before")).await.unwrap();

    let mut changes = book_input("after");
    changes.price = 250;
    changes.authors = vec!["C".to_string()];
    let updated = repo.update(original.id, &changes).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.title, "after");
    assert_eq!(updated.price, 250);
    assert_eq!(updated.authors, vec!["C".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_missing_book(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    assert!(matches!(
        repo.update(999_999, &book_input("x")).await,
        Err(StoreError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_delete_missing_book_succeeds(pool: PgPool) {
    let repo = BooksRepository::new(pool);
    assert!(repo.delete(999_999).await.is_ok());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_user_lifecycle(pool: PgPool) {
    let repo = UsersRepository::new(pool);
    let data = new_user();

    let inserted = repo.insert(&data).await.unwrap();
    assert_eq!(inserted.username, data.username);
    assert_eq!(inserted.hashed_password, data.hashed_password);

    let fetched = repo.get_by_username(&data.username).await.unwrap();
    assert_eq!(fetched, inserted);

    let changes = UpdateUser {
        email: random_email(),
        fullname: random_fullname(),
        hashed_password: random_password(),
    };
    let updated = repo.update(&data.username, &changes).await.unwrap();
    assert_eq!(updated.username, data.username);
    assert_eq!(updated.email, changes.email);
    assert_eq!(updated.created_at, inserted.created_at);

    repo.delete(&data.username).await.unwrap();
    assert!(matches!(
        repo.get_by_username(&data.username).await,
        Err(StoreError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_duplicate_email_is_a_database_error(pool: PgPool) {
    let repo = UsersRepository::new(pool);
    let first = new_user();
    repo.insert(&first).await.unwrap();

    let mut second = new_user();
    second.email = first.email.clone();
    assert!(matches!(repo.insert(&second).await, Err(StoreError::Database(_))));
}
