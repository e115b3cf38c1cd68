//! 认证相关的 HTTP 处理器

use crate::{
    auth::{clear_session_cookie, session_cookie, AuthContext},
    error::AppError,
    extract::AppJson,
    middleware::AppState,
    models::auth::{LoginRequest, MessageResponse},
};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::sync::Arc;

/// 首页
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("index"))
}

/// 登录：校验密码并把会话令牌写入 Cookie
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service.login(req).await?;
    let cookie = session_cookie(&token, &state.config.security)?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Login successful")),
    ))
}

/// 登出：让客户端丢弃会话 Cookie（服务端无会话状态）
pub async fn logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie(&state.config.security))],
        Json(MessageResponse::new("Logged out")),
    )
}

/// 校验当前会话
pub async fn verify_session(auth_context: AuthContext) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Session valid for {}",
        auth_context.email
    )))
}

/// 控制台欢迎信息
pub async fn dashboard(auth_context: AuthContext) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome, {}",
        auth_context.first_name
    )))
}
