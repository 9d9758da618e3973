//! Domain entities - the core business objects.

mod author;
mod comment;
mod news;
mod tag;

pub use author::Author;
pub use comment::Comment;
pub use news::News;
pub use tag::Tag;

/// Identifier carried by entities that have not been persisted yet.
pub const UNSAVED_ID: i64 = 0;
