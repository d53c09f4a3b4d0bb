use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieCol::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieCol::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieCol::MovieId).integer().not_null())
                    .col(ColumnDef::new(MovieCol::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(MovieCol::AddTime)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_col_movie_id")
                            .from(MovieCol::Table, MovieCol::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_col_user_id")
                            .from(MovieCol::Table, MovieCol::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一会员对同一电影仅收藏一次
        manager
            .create_index(
                Index::create()
                    .name("uk_movie_col_movie_user")
                    .table(MovieCol::Table)
                    .col(MovieCol::MovieId)
                    .col(MovieCol::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_col_user_id")
                    .table(MovieCol::Table)
                    .col(MovieCol::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_col_add_time")
                    .table(MovieCol::Table)
                    .col(MovieCol::AddTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieCol::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MovieCol {
    Table,
    Id,
    MovieId,
    UserId,
    #[sea_orm(iden = "addTime")]
    AddTime,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
