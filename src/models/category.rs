//! Category domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

/// Create / update category request
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 30))]
    pub category_name: String,
}
