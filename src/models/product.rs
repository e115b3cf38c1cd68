//! Product domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub description: String,
    pub price: i32,
    pub category_id: i32,
}

/// Product listing row, joined with its category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductWithCategory {
    pub product_id: i32,
    pub product_name: String,
    pub description: String,
    pub price: i32,
    pub category_id: i32,
    pub category_name: Option<String>,
}

/// Create / update product request
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 30))]
    pub product_name: String,
    #[validate(length(max = 255))]
    pub description: String,
    #[validate(range(min = 0))]
    pub price: i32,
    pub category_id: i32,
}
