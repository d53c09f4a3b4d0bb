pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_tag_table;
mod m20240101_000002_create_user_table;
mod m20240101_000003_create_user_log_table;
mod m20240101_000004_create_movie_table;
mod m20240101_000005_create_preview_table;
mod m20240101_000006_create_comment_table;
mod m20240101_000007_create_movie_col_table;
mod m20240101_000008_create_auth_table;
mod m20240101_000009_create_role_table;
mod m20240101_000010_create_role_auth_table;
mod m20240101_000011_create_admin_table;
mod m20240101_000012_create_admin_log_table;
mod m20240101_000013_create_op_log_table;
mod m20240101_000014_insert_default_admin_data;

pub use m20240101_000014_insert_default_admin_data::{DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tag_table::Migration),
            Box::new(m20240101_000002_create_user_table::Migration),
            Box::new(m20240101_000003_create_user_log_table::Migration),
            Box::new(m20240101_000004_create_movie_table::Migration),
            Box::new(m20240101_000005_create_preview_table::Migration),
            Box::new(m20240101_000006_create_comment_table::Migration),
            Box::new(m20240101_000007_create_movie_col_table::Migration),
            Box::new(m20240101_000008_create_auth_table::Migration),
            Box::new(m20240101_000009_create_role_table::Migration),
            Box::new(m20240101_000010_create_role_auth_table::Migration),
            Box::new(m20240101_000011_create_admin_table::Migration),
            Box::new(m20240101_000012_create_admin_log_table::Migration),
            Box::new(m20240101_000013_create_op_log_table::Migration),
            Box::new(m20240101_000014_insert_default_admin_data::Migration),
        ]
    }
}
