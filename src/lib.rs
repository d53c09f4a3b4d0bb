//! # 电影站点持久层核心库
//!
//! 定义电影站点（会员、管理员、角色权限、电影、标签、评论、
//! 收藏、审计日志）的关系模式与仓储访问层。所有操作显式接收
//! 数据库连接，并发控制完全委托底层数据库。

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod repository;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{CatalogError, Result};
