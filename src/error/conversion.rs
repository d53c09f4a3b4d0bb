//! # 外部错误到 [`CatalogError`] 的转换
//!
//! 存储层错误原样向上传递，仅做分类：唯一约束与外键约束
//! 映射为 `Conflict`，其余归入 `Database`。

use sea_orm::{DbErr, SqlErr};

use super::CatalogError;

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::conflict(format!("唯一约束冲突: {msg}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Self::conflict(format!("外键约束冲突: {msg}"))
            }
            _ => Self::Database {
                message: err.to_string(),
                source: Some(err.into()),
            },
        }
    }
}

impl From<bcrypt::BcryptError> for CatalogError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal {
            message: "密码哈希处理失败".to_string(),
            source: Some(err.into()),
        }
    }
}
