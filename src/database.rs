//! # 数据库模块
//!
//! 数据库连接和迁移管理

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// 初始化数据库连接
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let url = config.get_connection_url()?;

    info!(
        "正在连接数据库: {}",
        if config.is_sqlite() {
            truncate_url(&url)
        } else {
            url.as_str()
        }
    );

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.query_timeout))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    info!("数据库连接成功");
    Ok(db)
}

/// 截断过长的连接地址用于日志输出；截断点落在多字节字符
/// 中间时保留完整地址。
fn truncate_url(url: &str) -> &str {
    url.get(..50).unwrap_or(url)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    info!("开始运行数据库迁移...");

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!("数据库迁移失败: {}", e);
            Err(e.into())
        }
    }
}

/// 检查数据库状态
pub async fn check_database_status(db: &DatabaseConnection) -> Result<()> {
    info!("检查数据库状态...");

    let status = ::migration::Migrator::get_pending_migrations(db).await?;

    if status.is_empty() {
        info!("所有迁移都已应用");
    } else {
        warn!("有 {} 个待应用的迁移", status.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_url() {
        let long = format!("sqlite://{}", "a".repeat(100));
        assert_eq!(truncate_url(&long).len(), 50);

        let short = "sqlite://./data/movie_catalog.db";
        assert_eq!(truncate_url(short), short);

        // 第 50 字节落在多字节字符中间时不截断
        let multibyte = format!("sqlite:///{}", "库".repeat(14));
        assert_eq!(truncate_url(&multibyte), multibyte);
    }
}
