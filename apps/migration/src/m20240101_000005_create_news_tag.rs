use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_tags::Tag;
use super::m20240101_000003_create_news::News;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsTag::Table)
                    .if_not_exists()
                    .col(big_integer(NewsTag::NewsId))
                    .col(big_integer(NewsTag::TagId))
                    .primary_key(Index::create().col(NewsTag::NewsId).col(NewsTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_tag_news_id")
                            .from(NewsTag::Table, NewsTag::NewsId)
                            .to(News::Table, News::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_tag_tag_id")
                            .from(NewsTag::Table, NewsTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NewsTag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NewsTag {
    Table,
    NewsId,
    TagId,
}
