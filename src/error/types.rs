//! # 错误类型定义

use thiserror::Error;

/// 数据访问层主要错误类型
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 数据库相关错误
    #[error("数据库错误: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 按 id 或唯一字段查找未命中
    #[error("{entity} 不存在: {id}")]
    NotFound { entity: &'static str, id: String },

    /// 唯一约束或外键约束冲突
    #[error("约束冲突: {message}")]
    Conflict { message: String },

    /// 进入存储层之前的输入校验失败
    #[error("输入校验失败: {message}")]
    Validation { message: String },

    /// 配置相关错误
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 系统内部错误
    #[error("内部错误: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 带上下文的错误包装
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<CatalogError>,
    },
}

impl CatalogError {
    /// 创建数据库错误
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带源错误的数据库错误
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建未找到错误
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// 创建约束冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// 创建输入校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// 创建带源错误的配置错误
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// 是否为未找到错误（穿透上下文包装）
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Context { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// 是否为约束冲突错误（穿透上下文包装）
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Conflict { .. } => true,
            Self::Context { source, .. } => source.is_conflict(),
            _ => false,
        }
    }

    /// 是否为输入校验错误（穿透上下文包装）
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation { .. } => true,
            Self::Context { source, .. } => source.is_validation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Context as _;

    #[test]
    fn test_error_kind_helpers() {
        let err = CatalogError::not_found("user", 42);
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert_eq!(err.to_string(), "user 不存在: 42");

        let err = CatalogError::conflict("唯一约束冲突: user.name");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_context_preserves_kind() {
        let err: crate::error::Result<()> =
            Err(CatalogError::not_found("movie", 1)).context("Failed to fetch movie");
        let err = err.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Failed to fetch movie");
    }
}
