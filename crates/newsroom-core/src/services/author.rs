use std::sync::Arc;

use async_trait::async_trait;
use newsroom_shared::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};

use super::{CrudService, NewsScopedService, deleted, required};
use crate::domain::Author;
use crate::error::{DomainError, DomainResult};
use crate::ports::{AuthorRepository, BaseRepository, NewsRepository};

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    news: Arc<dyn NewsRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { authors, news }
    }

    async fn find(&self, id: i64) -> DomainResult<Author> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Self::ENTITY, id))
    }
}

#[async_trait]
impl CrudService for AuthorService {
    type Create = CreateAuthorRequest;
    type Update = UpdateAuthorRequest;
    type Output = AuthorResponse;

    const ENTITY: &'static str = "Author";

    async fn list(&self) -> DomainResult<Vec<AuthorResponse>> {
        let authors = self.authors.find_all().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<AuthorResponse> {
        Ok(self.find(id).await?.into())
    }

    async fn create(&self, input: CreateAuthorRequest) -> DomainResult<AuthorResponse> {
        let name = required(input.name, "name")?;
        let saved = self.authors.save(Author::new(name)).await?;

        tracing::debug!(author_id = saved.id, "Author created");
        Ok(saved.into())
    }

    async fn update(&self, input: UpdateAuthorRequest, id: i64) -> DomainResult<AuthorResponse> {
        let mut author = self.find(id).await?;
        if let Some(name) = input.name {
            author.name = name;
        }

        Ok(self.authors.save(author).await?.into())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        deleted(self.authors.delete(id).await)
    }
}

#[async_trait]
impl NewsScopedService for AuthorService {
    async fn list_by_news_id(&self, news_id: i64) -> DomainResult<Vec<AuthorResponse>> {
        let news = self
            .news
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| DomainError::not_found("News", news_id))?;

        Ok(vec![self.find(news.author_id).await?.into()])
    }
}
