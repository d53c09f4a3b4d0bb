use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleAuth::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoleAuth::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoleAuth::RoleId).integer().not_null())
                    .col(ColumnDef::new(RoleAuth::AuthId).integer().not_null())
                    .col(
                        ColumnDef::new(RoleAuth::AddTime)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_auth_role_id")
                            .from(RoleAuth::Table, RoleAuth::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_auth_auth_id")
                            .from(RoleAuth::Table, RoleAuth::AuthId)
                            .to(Auth::Table, Auth::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk_role_auth_role_auth")
                    .table(RoleAuth::Table)
                    .col(RoleAuth::RoleId)
                    .col(RoleAuth::AuthId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_role_auth_auth_id")
                    .table(RoleAuth::Table)
                    .col(RoleAuth::AuthId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleAuth::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RoleAuth {
    Table,
    Id,
    RoleId,
    AuthId,
    #[sea_orm(iden = "addTime")]
    AddTime,
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Auth {
    Table,
    Id,
}
