//! # 配置管理模块

pub mod app_config;
pub mod database;

pub use app_config::AppConfig;
pub use database::DatabaseConfig;
