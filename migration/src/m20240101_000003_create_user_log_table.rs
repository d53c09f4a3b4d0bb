use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserLog::UserId).integer().not_null())
                    .col(ColumnDef::new(UserLog::Ip).string_len(100).not_null())
                    .col(
                        ColumnDef::new(UserLog::AddTime)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_log_user_id")
                            .from(UserLog::Table, UserLog::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_log_user_id")
                    .table(UserLog::Table)
                    .col(UserLog::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_log_add_time")
                    .table(UserLog::Table)
                    .col(UserLog::AddTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserLog {
    Table,
    Id,
    UserId,
    Ip,
    #[sea_orm(iden = "addTime")]
    AddTime,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
