//! User model and related types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub username: String,
    pub email: String,
    pub fullname: String,
    /// Argon2 PHC string, never the submitted password
    pub hashed_password: String,
    pub created_at: NaiveDateTime,
}

/// Create / update user request carrying the plaintext password.
///
/// On update the path selects the user and `username` is ignored.
#[derive(Clone, Deserialize, ToSchema)]
pub struct UserInput {
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub fullname: String,
    pub password: String,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("fullname", &self.fullname)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Row to insert: the password has already been hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub fullname: String,
    pub hashed_password: String,
}

/// Replacement values for an existing user; the username never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub email: String,
    pub fullname: String,
    pub hashed_password: String,
}
