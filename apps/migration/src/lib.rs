//! Schema migrations for the newsroom database, in dependency order.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_authors;
mod m20240101_000002_create_tags;
mod m20240101_000003_create_news;
mod m20240101_000004_create_comments;
mod m20240101_000005_create_news_tag;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_authors::Migration),
            Box::new(m20240101_000002_create_tags::Migration),
            Box::new(m20240101_000003_create_news::Migration),
            Box::new(m20240101_000004_create_comments::Migration),
            Box::new(m20240101_000005_create_news_tag::Migration),
        ]
    }
}
