//! User management service

use std::sync::Arc;

use async_trait::async_trait;

use super::password::hash_password_blocking;
use crate::{
    error::{AppResult, ServiceError},
    models::{NewUser, UpdateUser, User, UserInput},
    repository::{StoreError, UserStore},
};

/// User operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn add_user(&self, data: UserInput) -> AppResult<User>;

    async fn get_user(&self, username: &str) -> AppResult<User>;

    async fn update_user(&self, username: &str, data: UserInput) -> AppResult<User>;

    async fn delete_user(&self, username: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Hash the submitted password; the plaintext goes no further than here
    async fn hash(&self, operation: &'static str, password: String) -> AppResult<String> {
        hash_password_blocking(password).await.map_err(|e| {
            tracing::error!(entity = "user", operation, error = %e, "password hashing failed");
            ServiceError::internal("Error Hash Password", e).into()
        })
    }
}

fn log_store_error(operation: &'static str, err: &StoreError) {
    tracing::error!(entity = "user", operation, error = %err, "user store operation failed");
}

#[async_trait]
impl UserDirectory for UsersService {
    async fn add_user(&self, data: UserInput) -> AppResult<User> {
        let hashed_password = self.hash("insert", data.password).await?;

        let user = NewUser {
            username: data.username,
            email: data.email,
            fullname: data.fullname,
            hashed_password,
        };

        self.store.insert(&user).await.map_err(|e| {
            log_store_error("insert", &e);
            ServiceError::internal("Error AddUser Service", e).into()
        })
    }

    async fn get_user(&self, username: &str) -> AppResult<User> {
        self.store.get_by_username(username).await.map_err(|e| {
            log_store_error("get_by_username", &e);
            let err = match e {
                StoreError::NotFound => ServiceError::not_found("Error User Not Found", e),
                _ => ServiceError::internal("Error GetUser Service", e),
            };
            err.into()
        })
    }

    async fn update_user(&self, username: &str, data: UserInput) -> AppResult<User> {
        let hashed_password = self.hash("update", data.password).await?;

        let changes = UpdateUser {
            email: data.email,
            fullname: data.fullname,
            hashed_password,
        };

        self.store.update(username, &changes).await.map_err(|e| {
            log_store_error("update", &e);
            ServiceError::internal("Error PutUser Service", e).into()
        })
    }

    async fn delete_user(&self, username: &str) -> AppResult<()> {
        self.store.delete(username).await.map_err(|e| {
            log_store_error("delete", &e);
            ServiceError::internal("Error DeleteUser Service", e).into()
        })
    }
}
