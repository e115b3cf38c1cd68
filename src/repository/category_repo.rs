//! Category repository

use crate::{
    error::AppError,
    models::category::{Category, CategoryRequest},
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CategoryRepository {
    db: PgPool,
}

impl CategoryRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM category ORDER BY category_id")
                .fetch_all(&self.db)
                .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let category =
            sqlx::query_as::<_, Category>("SELECT * FROM category WHERE category_id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(category)
    }

    pub async fn create(&self, req: &CategoryRequest) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO category (category_name) VALUES ($1) RETURNING *",
        )
        .bind(&req.category_name)
        .fetch_one(&self.db)
        .await?;

        Ok(category)
    }

    pub async fn update(&self, id: i32, req: &CategoryRequest) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE category SET category_name = $2 WHERE category_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&req.category_name)
        .fetch_optional(&self.db)
        .await?;

        Ok(category)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "DELETE FROM category WHERE category_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| super::map_write_error(e, "Category has associated products. Cannot delete."))?;

        Ok(category)
    }
}
