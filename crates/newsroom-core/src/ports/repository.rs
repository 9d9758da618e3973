use async_trait::async_trait;

use crate::domain::{Author, Comment, News, Tag};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Load every entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Check whether an entity with this ID exists.
    async fn exists(&self, id: ID) -> Result<bool, RepoError>;

    /// Save an entity. Unsaved entities are inserted and get an id assigned,
    /// persisted ones are overwritten.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when
    /// nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// News repository, including the news-tag association.
#[async_trait]
pub trait NewsRepository: BaseRepository<News, i64> {
    /// Ids of the tags attached to a news item, ascending.
    async fn find_tag_ids(&self, news_id: i64) -> Result<Vec<i64>, RepoError>;

    /// Every `(news_id, tag_id)` link, ordered by news id then tag id.
    async fn find_tag_links(&self) -> Result<Vec<(i64, i64)>, RepoError>;

    /// Save a news item and, when `tag_ids` is given, replace its whole tag
    /// set in the same transaction. Nothing is persisted if either step fails.
    async fn save_with_tags(
        &self,
        news: News,
        tag_ids: Option<&[i64]>,
    ) -> Result<News, RepoError>;
}

#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i64> {}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, RepoError>;
}

#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i64> {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, RepoError>;
}
