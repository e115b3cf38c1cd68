//! Product repository

use crate::{
    error::AppError,
    models::product::{Product, ProductRequest, ProductWithCategory},
};
use sqlx::PgPool;

use super::map_write_error;

#[derive(Clone)]
pub struct ProductRepository {
    db: PgPool,
}

impl ProductRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出所有商品（附带分类名称）
    pub async fn list_with_category(&self) -> Result<Vec<ProductWithCategory>, AppError> {
        let products = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT
                p.product_id,
                p.product_name,
                p.description,
                p.price,
                p.category_id,
                c.category_name
            FROM product p
            LEFT JOIN category c ON p.category_id = c.category_id
            ORDER BY p.product_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM product WHERE product_id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(product)
    }

    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM product WHERE category_id = $1 ORDER BY product_id",
        )
        .bind(category_id)
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    pub async fn create(&self, req: &ProductRequest) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO product (product_name, description, price, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.product_name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Unknown category"))
    }

    pub async fn update(&self, id: i32, req: &ProductRequest) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE product
            SET
                product_name = $2,
                description = $3,
                price = $4,
                category_id = $5
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.product_name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.category_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Unknown category"))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Product>, AppError> {
        let product =
            sqlx::query_as::<_, Product>("DELETE FROM product WHERE product_id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(product)
    }
}
