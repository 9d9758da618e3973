//! Tag entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_tag::Entity")]
    NewsTag,
}

impl Related<super::news_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsTag.def()
    }
}

impl Related<super::news::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_tag::Relation::News.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for newsroom_core::domain::Tag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<newsroom_core::domain::Tag> for ActiveModel {
    fn from(tag: newsroom_core::domain::Tag) -> Self {
        Self {
            id: if tag.is_new() { NotSet } else { Set(tag.id) },
            name: Set(tag.name),
        }
    }
}
