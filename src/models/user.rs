//! User domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Create / update user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 25))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(max = 1024))]
    pub password: String,
}

/// User response (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}
