//! 认证服务：登录、密码哈希

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher},
    config::AppConfig,
    error::AppError,
    models::auth::LoginRequest,
    repository::UserDirectory,
};
use chrono::Duration;
use std::sync::Arc;

pub struct AuthService {
    directory: Arc<dyn UserDirectory>,
    jwt_service: Arc<JwtService>,
    hasher: PasswordHasher,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        jwt_service: Arc<JwtService>,
        hasher: PasswordHasher,
        session_ttl: Duration,
    ) -> Self {
        Self {
            directory,
            jwt_service,
            hasher,
            session_ttl,
        }
    }

    /// 使用配置中的令牌有效期创建服务
    pub fn from_config(
        directory: Arc<dyn UserDirectory>,
        jwt_service: Arc<JwtService>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            directory,
            jwt_service,
            PasswordHasher::new(),
            Duration::seconds(config.security.access_token_exp_secs as i64),
        )
    }

    /// 用户登录，成功时返回签名后的会话令牌
    pub async fn login(&self, req: LoginRequest) -> Result<String, AppError> {
        let user = self
            .directory
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::UnknownAccount)?;

        // 验证密码
        if !self.verify_password(req.password, user.password_hash.clone()).await? {
            tracing::info!(user_id = user.user_id, "Login failed: password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt_service.issue(&user.email, self.session_ttl)?;

        tracing::info!(user_id = user.user_id, "Login succeeded");

        Ok(token)
    }

    /// 哈希密码（在阻塞线程池中执行）
    pub async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    /// 验证密码（在阻塞线程池中执行）
    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AppError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))
    }
}
