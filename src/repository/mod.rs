//! Database repository layer

pub mod category_repo;
pub mod product_repo;
pub mod user_repo;

pub use category_repo::*;
pub use product_repo::*;
pub use user_repo::*;

use crate::error::AppError;

/// 将写操作的约束冲突转换为客户端错误
/// 唯一约束 -> 409，外键约束 -> 400，其他保持为数据库错误
pub(crate) fn map_write_error(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(message.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::BadRequest(message.to_string());
        }
    }
    AppError::Database(e)
}
