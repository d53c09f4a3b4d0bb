use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movie::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Movie::Title)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Movie::Url)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Movie::Info).text())
                    .col(ColumnDef::new(Movie::Log).string_len(255).unique_key())
                    .col(
                        ColumnDef::new(Movie::Star)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movie::PlayNum)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movie::CommentNum)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Movie::TagId).integer().not_null())
                    .col(ColumnDef::new(Movie::Area).string_len(255))
                    .col(ColumnDef::new(Movie::ReleaseTime).date())
                    .col(ColumnDef::new(Movie::Length).string_len(100))
                    .col(
                        ColumnDef::new(Movie::AddTime)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_tag_id")
                            .from(Movie::Table, Movie::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_tag_id")
                    .table(Movie::Table)
                    .col(Movie::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_add_time")
                    .table(Movie::Table)
                    .col(Movie::AddTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Url,
    Info,
    Log,
    Star,
    #[sea_orm(iden = "playNum")]
    PlayNum,
    #[sea_orm(iden = "commentNum")]
    CommentNum,
    TagId,
    Area,
    ReleaseTime,
    Length,
    #[sea_orm(iden = "addTime")]
    AddTime,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
}
