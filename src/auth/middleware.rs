//! 会话认证中间件

use crate::{
    auth::session::{AuthContext, SessionResolver},
    error::AppError,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// 会话认证中间件 - 必须认证
pub async fn session_auth_middleware(
    State(resolver): State<Arc<SessionResolver>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Cookie 解析会话
    let auth_context = resolver.resolve(req.headers()).await?;

    // 附加到请求扩展
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
