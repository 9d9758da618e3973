//! SeaORM entities for the newsroom schema.

pub mod author;
pub mod comment;
pub mod news;
pub mod news_tag;
pub mod tag;
