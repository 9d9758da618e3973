use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use newsroom_shared::dto::{CreateNewsRequest, NewsResponse, UpdateNewsRequest};

use super::{CrudService, deleted, required};
use crate::domain::News;
use crate::error::{DomainError, DomainResult};
use crate::ports::{AuthorRepository, BaseRepository, NewsRepository, TagRepository};

/// News CRUD, including the author reference and the tag set.
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    authors: Arc<dyn AuthorRepository>,
    tags: Arc<dyn TagRepository>,
}

impl NewsService {
    pub fn new(
        news: Arc<dyn NewsRepository>,
        authors: Arc<dyn AuthorRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            news,
            authors,
            tags,
        }
    }

    async fn to_response(&self, news: News) -> DomainResult<NewsResponse> {
        let tag_ids = self.news.find_tag_ids(news.id).await?;
        Ok(news_response(news, tag_ids))
    }

    async fn find(&self, id: i64) -> DomainResult<News> {
        self.news
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Self::ENTITY, id))
    }

    async fn ensure_author(&self, author_id: i64) -> DomainResult<()> {
        if !self.authors.exists(author_id).await? {
            return Err(DomainError::not_found("Author", author_id));
        }
        Ok(())
    }

    /// Deduplicate the requested tag ids and check each one exists.
    async fn resolve_tags(&self, tag_ids: Vec<i64>) -> DomainResult<Vec<i64>> {
        let mut tag_ids = tag_ids;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        for &tag_id in &tag_ids {
            if !self.tags.exists(tag_id).await? {
                return Err(DomainError::not_found("Tag", tag_id));
            }
        }
        Ok(tag_ids)
    }
}

#[async_trait]
impl CrudService for NewsService {
    type Create = CreateNewsRequest;
    type Update = UpdateNewsRequest;
    type Output = NewsResponse;

    const ENTITY: &'static str = "News";

    async fn list(&self) -> DomainResult<Vec<NewsResponse>> {
        let all = self.news.find_all().await?;

        let mut tags_by_news: HashMap<i64, Vec<i64>> = HashMap::new();
        for (news_id, tag_id) in self.news.find_tag_links().await? {
            tags_by_news.entry(news_id).or_default().push(tag_id);
        }

        Ok(all
            .into_iter()
            .map(|news| {
                let tag_ids = tags_by_news.remove(&news.id).unwrap_or_default();
                news_response(news, tag_ids)
            })
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<NewsResponse> {
        let news = self.find(id).await?;
        self.to_response(news).await
    }

    async fn create(&self, input: CreateNewsRequest) -> DomainResult<NewsResponse> {
        let title = required(input.title, "title")?;
        let content = required(input.content, "content")?;
        let author_id = required(input.author_id, "author_id")?;

        self.ensure_author(author_id).await?;
        let tag_ids = self.resolve_tags(input.tag_ids).await?;

        let saved = self
            .news
            .save_with_tags(News::new(author_id, title, content), Some(tag_ids.as_slice()))
            .await?;

        tracing::debug!(news_id = saved.id, author_id, "News created");
        Ok(news_response(saved, tag_ids))
    }

    async fn update(&self, input: UpdateNewsRequest, id: i64) -> DomainResult<NewsResponse> {
        let mut news = self.find(id).await?;

        if let Some(title) = input.title {
            news.title = title;
        }
        if let Some(content) = input.content {
            news.content = content;
        }
        if let Some(author_id) = input.author_id {
            self.ensure_author(author_id).await?;
            news.author_id = author_id;
        }
        let tag_ids = match input.tag_ids {
            Some(tag_ids) => Some(self.resolve_tags(tag_ids).await?),
            None => None,
        };

        news.touch();
        let saved = self.news.save_with_tags(news, tag_ids.as_deref()).await?;

        tracing::debug!(news_id = saved.id, "News updated");
        self.to_response(saved).await
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        deleted(self.news.delete(id).await)
    }
}

fn news_response(news: News, tag_ids: Vec<i64>) -> NewsResponse {
    NewsResponse {
        id: news.id,
        title: news.title,
        content: news.content,
        author_id: news.author_id,
        tag_ids,
        created_at: news.created_at,
        updated_at: news.updated_at,
    }
}
