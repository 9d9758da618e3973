use std::sync::Arc;

use async_trait::async_trait;
use newsroom_shared::dto::{CreateTagRequest, TagResponse, UpdateTagRequest};

use super::{CrudService, NewsScopedService, deleted, required};
use crate::domain::Tag;
use crate::error::{DomainError, DomainResult};
use crate::ports::{BaseRepository, NewsRepository, TagRepository};

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

pub struct TagService {
    tags: Arc<dyn TagRepository>,
    news: Arc<dyn NewsRepository>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { tags, news }
    }

    async fn find(&self, id: i64) -> DomainResult<Tag> {
        self.tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Self::ENTITY, id))
    }
}

#[async_trait]
impl CrudService for TagService {
    type Create = CreateTagRequest;
    type Update = UpdateTagRequest;
    type Output = TagResponse;

    const ENTITY: &'static str = "Tag";

    async fn list(&self) -> DomainResult<Vec<TagResponse>> {
        let tags = self.tags.find_all().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<TagResponse> {
        Ok(self.find(id).await?.into())
    }

    async fn create(&self, input: CreateTagRequest) -> DomainResult<TagResponse> {
        let name = required(input.name, "name")?;
        let saved = self.tags.save(Tag::new(name)).await?;

        tracing::debug!(tag_id = saved.id, "Tag created");
        Ok(saved.into())
    }

    async fn update(&self, input: UpdateTagRequest, id: i64) -> DomainResult<TagResponse> {
        let mut tag = self.find(id).await?;
        if let Some(name) = input.name {
            tag.name = name;
        }

        Ok(self.tags.save(tag).await?.into())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        deleted(self.tags.delete(id).await)
    }
}

#[async_trait]
impl NewsScopedService for TagService {
    async fn list_by_news_id(&self, news_id: i64) -> DomainResult<Vec<TagResponse>> {
        if !self.news.exists(news_id).await? {
            return Err(DomainError::not_found("News", news_id));
        }

        let tags = self.tags.find_by_news_id(news_id).await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
