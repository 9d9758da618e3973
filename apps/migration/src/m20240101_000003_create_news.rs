use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_authors::Author;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(News::AuthorId))
                    .col(string_len(News::Title, 30))
                    .col(string_len(News::Content, 255))
                    .col(timestamp_with_time_zone(News::CreatedAt))
                    .col(timestamp_with_time_zone(News::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_author_id")
                            .from(News::Table, News::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(News::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}
