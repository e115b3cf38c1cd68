//! 分类管理的 HTTP 处理器

use crate::{
    error::AppError,
    extract::AppJson,
    middleware::AppState,
    models::category::{Category, CategoryRequest},
    repository::CategoryRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    Ok(Json(repo.list().await?))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category".to_string()))?;

    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(&req).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(req): AppJson<CategoryRequest>,
) -> Result<Json<Category>, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Category".to_string()))?;

    Ok(Json(category))
}

/// 删除分类；仍有商品引用时由外键约束拒绝（400）
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category".to_string()))?;

    tracing::info!(category_id = category.category_id, "Category deleted");

    Ok(Json(category))
}
