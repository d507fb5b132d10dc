//! Users repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{StoreError, StoreResult};
use crate::models::{NewUser, UpdateUser, User};

/// Persistence operations on users, keyed by username
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, data: &NewUser) -> StoreResult<User>;

    async fn get_by_username(&self, username: &str) -> StoreResult<User>;

    async fn update(&self, username: &str, data: &UpdateUser) -> StoreResult<User>;

    async fn delete(&self, username: &str) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UsersRepository {
    async fn insert(&self, data: &NewUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, fullname, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING username, email, fullname, hashed_password, created_at
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.fullname)
        .bind(&data.hashed_password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_username(&self, username: &str) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, fullname, hashed_password, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn update(&self, username: &str, data: &UpdateUser) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $1, fullname = $2, hashed_password = $3
            WHERE username = $4
            RETURNING username, email, fullname, hashed_password, created_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.fullname)
        .bind(&data.hashed_password)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, username: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
