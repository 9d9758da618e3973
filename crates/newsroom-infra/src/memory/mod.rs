//! In-memory store - used as fallback when no database is configured.

mod store;

pub use store::{
    InMemoryAuthorRepository, InMemoryCommentRepository, InMemoryNewsRepository,
    InMemoryRepository, InMemoryStore, InMemoryTagRepository,
};

#[cfg(test)]
mod tests;
