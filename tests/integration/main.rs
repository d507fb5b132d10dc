//! Database-backed tests.
//!
//! All tests are ignored by default. Repository tests need `DATABASE_URL`
//! pointing at a PostgreSQL server; API tests also need a running server
//! (`BOOKSTORE_URL`, `ACCESS_TOKEN`). Run with: cargo test -- --ignored

mod api_tests;
mod repository_tests;
