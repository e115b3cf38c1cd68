//! 用户管理的 HTTP 处理器

use crate::{
    auth::AuthContext,
    error::AppError,
    extract::AppJson,
    middleware::AppState,
    models::user::{UserRequest, UserResponse},
    repository::UserRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 列出用户
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let users = repo.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// 注册用户（公开）
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<UserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let password_hash = state.auth_service.hash_password(req.password.clone()).await?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(&req, &password_hash).await?;

    tracing::info!(user_id = user.user_id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 更新用户（整体替换，密码重新哈希）
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Path(id): Path<i32>,
    AppJson(req): AppJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    req.validate().map_err(|e| AppError::validation(&e))?;

    let password_hash = state.auth_service.hash_password(req.password.clone()).await?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .update(id, &req, &password_hash)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    tracing::info!(user_id = user.user_id, "User deleted");

    Ok(Json(UserResponse::from(user)))
}
