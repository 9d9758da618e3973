//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
    TryIntoModel,
};

use newsroom_core::domain::{Comment, News, Tag};
use newsroom_core::error::RepoError;
use newsroom_core::ports::{AuthorRepository, CommentRepository, NewsRepository, TagRepository};

use super::entity::author::Entity as AuthorEntity;
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::news::{self, Entity as NewsEntity};
use super::entity::news_tag::{self, Entity as NewsTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::postgres_base::{PostgresBaseRepository, query_error, write_error};

/// PostgreSQL news repository.
pub type PostgresNewsRepository = PostgresBaseRepository<NewsEntity>;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn find_tag_ids(&self, news_id: i64) -> Result<Vec<i64>, RepoError> {
        let links = NewsTagEntity::find()
            .filter(news_tag::Column::NewsId.eq(news_id))
            .order_by_asc(news_tag::Column::TagId)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(links.into_iter().map(|link| link.tag_id).collect())
    }

    async fn find_tag_links(&self) -> Result<Vec<(i64, i64)>, RepoError> {
        let links = NewsTagEntity::find()
            .order_by_asc(news_tag::Column::NewsId)
            .order_by_asc(news_tag::Column::TagId)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(links
            .into_iter()
            .map(|link| (link.news_id, link.tag_id))
            .collect())
    }

    async fn save_with_tags(
        &self,
        news: News,
        tag_ids: Option<&[i64]>,
    ) -> Result<News, RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        let active_model: news::ActiveModel = news.into();
        let saved = active_model
            .save(&txn)
            .await
            .map_err(write_error)?
            .try_into_model()
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if let Some(tag_ids) = tag_ids {
            tracing::debug!(news_id = saved.id, tags = tag_ids.len(), "Replacing news tags");

            NewsTagEntity::delete_many()
                .filter(news_tag::Column::NewsId.eq(saved.id))
                .exec(&txn)
                .await
                .map_err(write_error)?;

            // insert_many rejects an empty batch
            if !tag_ids.is_empty() {
                let links = tag_ids.iter().map(|&tag_id| news_tag::ActiveModel {
                    news_id: Set(saved.id),
                    tag_id: Set(tag_id),
                });
                NewsTagEntity::insert_many(links)
                    .exec(&txn)
                    .await
                    .map_err(write_error)?;
            }
        }

        // Dropping `txn` on an early return rolls everything back.
        txn.commit().await.map_err(write_error)?;
        Ok(saved.into())
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::NewsId.eq(news_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .inner_join(NewsTagEntity)
            .filter(news_tag::Column::NewsId.eq(news_id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
