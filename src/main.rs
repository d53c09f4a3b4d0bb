//! # 电影站点持久层管理工具
//!
//! 数据库迁移、状态检查与默认管理员密码重置。

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use movie_catalog::repository::AdminsRepository;
use movie_catalog::{AppConfig, Result, database, logging};

#[derive(Parser)]
#[command(name = "movie-catalog", version, about = "电影站点持久层管理工具")]
struct Cli {
    /// 配置文件路径（TOML）
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 运行数据库迁移
    Migrate,
    /// 查看迁移状态
    Status,
    /// 重置管理员密码
    ResetAdmin {
        /// 管理员帐号
        #[arg(long, default_value = "admin")]
        name: String,
        /// 新密码
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init_logging(config.log_level.as_deref());

    let db = database::init_database(&config.database).await?;

    match cli.command {
        Command::Migrate => {
            database::run_migrations(&db).await?;
        }
        Command::Status => {
            database::check_database_status(&db).await?;
        }
        Command::ResetAdmin { name, password } => {
            AdminsRepository::new(&db)
                .reset_password(&name, &password)
                .await?;
            info!("管理员 {} 密码已重置", name);
        }
    }

    Ok(())
}
