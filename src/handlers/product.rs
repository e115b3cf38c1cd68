//! 商品管理的 HTTP 处理器

use crate::{
    error::AppError,
    extract::AppJson,
    middleware::AppState,
    models::product::{Product, ProductRequest, ProductWithCategory},
    repository::ProductRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductWithCategory>>, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.list_with_category().await?))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(product))
}

/// 按分类列出商品，分类下没有商品时返回 404
pub async fn list_products_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<Product>>, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.list_by_category(category_id).await?;

    if products.is_empty() {
        return Err(AppError::NotFound("Products for this category".to_string()));
    }

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(&req).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    AppJson(req): AppJson<ProductRequest>,
) -> Result<Json<Product>, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(product))
}
