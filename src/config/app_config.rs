//! # 应用配置结构定义

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DatabaseConfig;
use crate::error::{CatalogError, Result};

/// 应用主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// 从 TOML 文件加载配置；未给出路径时使用默认值。
    ///
    /// 环境变量 `DATABASE_URL` 优先于文件中的数据库地址。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    CatalogError::config_with_source(
                        format!("无法读取配置文件: {}", path.display()),
                        e,
                    )
                })?;
                toml::from_str(&content).map_err(|e| {
                    CatalogError::config_with_source(
                        format!("配置文件解析失败: {}", path.display()),
                        e,
                    )
                })?
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }

        Ok(config)
    }
}
