use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 审计行必须保留：admin_id 外键为 Restrict
        manager
            .create_table(
                Table::create()
                    .table(OpLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OpLog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OpLog::AdminId).integer().not_null())
                    .col(ColumnDef::new(OpLog::Ip).string_len(100).not_null())
                    .col(ColumnDef::new(OpLog::Reason).text().not_null())
                    .col(
                        ColumnDef::new(OpLog::AddTime)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_op_log_admin_id")
                            .from(OpLog::Table, OpLog::AdminId)
                            .to(Admin::Table, Admin::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_op_log_admin_id")
                    .table(OpLog::Table)
                    .col(OpLog::AdminId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_op_log_add_time")
                    .table(OpLog::Table)
                    .col(OpLog::AddTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OpLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OpLog {
    Table,
    Id,
    AdminId,
    Ip,
    Reason,
    #[sea_orm(iden = "addTime")]
    AddTime,
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    Id,
}
