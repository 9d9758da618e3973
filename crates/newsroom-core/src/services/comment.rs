use std::sync::Arc;

use async_trait::async_trait;
use newsroom_shared::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::{CrudService, NewsScopedService, deleted, required};
use crate::domain::Comment;
use crate::error::{DomainError, DomainResult};
use crate::ports::{BaseRepository, CommentRepository, NewsRepository};

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            news_id: comment.news_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    news: Arc<dyn NewsRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { comments, news }
    }

    async fn find(&self, id: i64) -> DomainResult<Comment> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Self::ENTITY, id))
    }

    async fn ensure_news(&self, news_id: i64) -> DomainResult<()> {
        if !self.news.exists(news_id).await? {
            return Err(DomainError::not_found("News", news_id));
        }
        Ok(())
    }
}

#[async_trait]
impl CrudService for CommentService {
    type Create = CreateCommentRequest;
    type Update = UpdateCommentRequest;
    type Output = CommentResponse;

    const ENTITY: &'static str = "Comment";

    async fn list(&self) -> DomainResult<Vec<CommentResponse>> {
        let comments = self.comments.find_all().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<CommentResponse> {
        Ok(self.find(id).await?.into())
    }

    async fn create(&self, input: CreateCommentRequest) -> DomainResult<CommentResponse> {
        let content = required(input.content, "content")?;
        let news_id = required(input.news_id, "news_id")?;
        self.ensure_news(news_id).await?;

        let saved = self.comments.save(Comment::new(news_id, content)).await?;

        tracing::debug!(comment_id = saved.id, news_id, "Comment created");
        Ok(saved.into())
    }

    async fn update(&self, input: UpdateCommentRequest, id: i64) -> DomainResult<CommentResponse> {
        let mut comment = self.find(id).await?;

        if let Some(content) = input.content {
            comment.content = content;
        }
        if let Some(news_id) = input.news_id {
            self.ensure_news(news_id).await?;
            comment.news_id = news_id;
        }

        comment.touch();
        Ok(self.comments.save(comment).await?.into())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        deleted(self.comments.delete(id).await)
    }
}

#[async_trait]
impl NewsScopedService for CommentService {
    async fn list_by_news_id(&self, news_id: i64) -> DomainResult<Vec<CommentResponse>> {
        self.ensure_news(news_id).await?;

        let comments = self.comments.find_by_news_id(news_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
