//! User repository (数据库访问层)

use crate::{
    error::AppError,
    models::user::{User, UserRequest},
};
use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;

/// 用户目录：会话解析和登录流程只依赖按邮箱查找
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 根据邮箱查找用户，不存在时返回 None
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[derive(Clone)]
pub struct UserRepository {
    db: PgPool,
}

impl UserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据 ID 查找用户
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// 创建用户
    pub async fn create(&self, req: &UserRequest, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Email already registered"))
    }

    /// 更新用户（整体替换）
    pub async fn update(
        &self,
        id: i32,
        req: &UserRequest,
        password_hash: &str,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                first_name = $2,
                last_name = $3,
                email = $4,
                password_hash = $5
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Email already registered"))
    }

    /// 删除用户，返回被删除的记录
    pub async fn delete(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("DELETE FROM users WHERE user_id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// 列出所有用户
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY user_id")
            .fetch_all(&self.db)
            .await?;

        Ok(users)
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }
}
