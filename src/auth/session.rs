//! Session resolution: `access_token` cookie -> authenticated identity
//!
//! Every protected request walks the same steps with no retries and no
//! caching between requests:
//!
//! 1. read the `access_token` cookie (absent: [`AuthRejection::MissingToken`])
//! 2. verify the token (failure: [`AuthRejection::Token`])
//! 3. look the subject up in the [`UserDirectory`] (absent: [`AuthRejection::UnknownSubject`])
//! 4. hand the resulting [`AuthContext`] to the handler

use crate::{
    auth::{
        cookie::{read_cookie, ACCESS_TOKEN_COOKIE},
        jwt::{JwtService, TokenError},
    },
    error::AppError,
    models::user::User,
    repository::UserDirectory,
};
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;
use thiserror::Error;

/// Why a session could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("missing token")]
    MissingToken,

    #[error("{0}")]
    Token(#[from] TokenError),

    #[error("unknown subject")]
    UnknownSubject,
}

impl AuthRejection {
    /// Short reason for logs
    pub fn reason(&self) -> &'static str {
        match self {
            AuthRejection::MissingToken => "missing token",
            AuthRejection::Token(TokenError::Malformed) => "malformed token",
            AuthRejection::Token(TokenError::BadSignature) => "bad signature",
            AuthRejection::Token(TokenError::Expired) => "token expired",
            AuthRejection::Token(TokenError::MissingSubject) => "missing subject",
            AuthRejection::UnknownSubject => "unknown subject",
        }
    }

    /// 401 by default, 403 for tokens that are not even well formed,
    /// 404 when the subject no longer exists.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthRejection::Token(TokenError::Malformed) => StatusCode::FORBIDDEN,
            AuthRejection::UnknownSubject => StatusCode::NOT_FOUND,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Message safe to put in a response body
    pub fn public_message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::FORBIDDEN => "Access denied",
            StatusCode::NOT_FOUND => "User not found",
            _ => "Authentication failed",
        }
    }
}

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for AuthContext {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Resolves request cookies into an [`AuthContext`]
#[derive(Clone)]
pub struct SessionResolver {
    jwt_service: Arc<JwtService>,
    directory: Arc<dyn UserDirectory>,
}

impl SessionResolver {
    pub fn new(jwt_service: Arc<JwtService>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            jwt_service,
            directory,
        }
    }

    /// Resolve the session carried by `headers`.
    ///
    /// Rejections come back as [`AppError::Session`]; a failing directory
    /// lookup stays an [`AppError::Database`] (or whatever the directory
    /// reports) so it is not mistaken for a bad session.
    pub async fn resolve(&self, headers: &HeaderMap) -> Result<AuthContext, AppError> {
        let token = read_cookie(headers, ACCESS_TOKEN_COOKIE)
            .ok_or_else(|| reject(AuthRejection::MissingToken))?;

        let claims = self
            .jwt_service
            .verify(&token)
            .map_err(|e| reject(AuthRejection::Token(e)))?;

        let user = self
            .directory
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| reject(AuthRejection::UnknownSubject))?;

        tracing::debug!(user_id = user.user_id, "Session resolved");

        Ok(AuthContext::from(user))
    }
}

fn reject(rejection: AuthRejection) -> AppError {
    tracing::debug!(reason = rejection.reason(), "Session rejected");
    AppError::Session(rejection)
}
