//! CRUD services - one per resource, composed explicitly from repository ports.

mod author;
mod comment;
mod news;
mod tag;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{DomainError, DomainResult, RepoError};
use crate::pagination::SortKey;

pub use author::AuthorService;
pub use comment::CommentService;
pub use news::NewsService;
pub use tag::TagService;

/// Standard operations every resource exposes.
#[async_trait]
pub trait CrudService: Send + Sync + 'static {
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;
    type Output: Serialize + SortKey + Send + 'static;

    /// Entity name used in error messages.
    const ENTITY: &'static str;

    async fn list(&self) -> DomainResult<Vec<Self::Output>>;

    async fn get_by_id(&self, id: i64) -> DomainResult<Self::Output>;

    async fn create(&self, input: Self::Create) -> DomainResult<Self::Output>;

    /// Apply the fields present in `input` to the entity with this id.
    async fn update(&self, input: Self::Update, id: i64) -> DomainResult<Self::Output>;

    /// Returns whether an entity existed and was removed.
    async fn delete_by_id(&self, id: i64) -> DomainResult<bool>;
}

/// Resources that can be listed through the news item they belong to.
#[async_trait]
pub trait NewsScopedService: CrudService {
    /// Fails with [`DomainError::NotFound`] when the news item does not exist.
    async fn list_by_news_id(&self, news_id: i64) -> DomainResult<Vec<Self::Output>>;
}

/// Turn a repository delete into the boolean the services report.
fn deleted(result: Result<(), RepoError>) -> DomainResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(RepoError::NotFound) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Unwrap a field the request validation already marked as required.
fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::Validation(format!("{field} is required")))
}
