//! News entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::news_tag::Entity")]
    NewsTag,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::news_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_tag::Relation::News.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain News.
impl From<Model> for newsroom_core::domain::News {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain News to SeaORM ActiveModel.
/// Unsaved news leave the id to the database sequence.
impl From<newsroom_core::domain::News> for ActiveModel {
    fn from(news: newsroom_core::domain::News) -> Self {
        Self {
            id: if news.is_new() { NotSet } else { Set(news.id) },
            author_id: Set(news.author_id),
            title: Set(news.title),
            content: Set(news.content),
            created_at: Set(news.created_at.into()),
            updated_at: Set(news.updated_at.into()),
        }
    }
}
