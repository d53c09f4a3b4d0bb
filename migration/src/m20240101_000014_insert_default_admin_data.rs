use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 默认超级管理员帐号
pub const DEFAULT_ADMIN_NAME: &str = "admin";

/// 默认超级管理员初始密码，上线后必须通过 `reset-admin` 修改
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_ROLE_NAME: &str = "超级管理员";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 插入默认角色
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Role::Table)
                    .columns([Role::Name])
                    .values_panic([DEFAULT_ROLE_NAME.into()])
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        let select = Query::select()
            .column(Role::Id)
            .from(Role::Table)
            .and_where(Expr::col(Role::Name).eq(DEFAULT_ROLE_NAME))
            .to_owned();
        let role_id: i32 = db
            .query_one(backend.build(&select))
            .await?
            .ok_or_else(|| DbErr::Custom("默认角色插入后未找到".to_string()))?
            .try_get("", "id")?;

        // 插入默认超级管理员（is_super = 0 为历史约定的超级管理员标志）
        let pwd = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)
            .map_err(|e| DbErr::Custom(format!("默认管理员密码哈希失败: {e}")))?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Admin::Table)
                    .columns([Admin::Name, Admin::Pwd, Admin::IsSuper, Admin::RoleId])
                    .values_panic([
                        DEFAULT_ADMIN_NAME.into(),
                        pwd.into(),
                        0_i16.into(),
                        role_id.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Admin::Table)
                    .and_where(Expr::col(Admin::Name).eq(DEFAULT_ADMIN_NAME))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Role::Table)
                    .and_where(Expr::col(Role::Name).eq(DEFAULT_ROLE_NAME))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    Name,
    Pwd,
    IsSuper,
    RoleId,
}
