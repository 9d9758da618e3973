//! Service behaviour over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use newsroom_core::DomainError;
use newsroom_core::domain::{Comment, Tag};
use newsroom_core::error::RepoError;
use newsroom_core::ports::{
    AuthorRepository, BaseRepository, CommentRepository, NewsRepository, TagRepository,
};
use newsroom_core::services::{
    AuthorService, CommentService, CrudService, NewsScopedService, NewsService, TagService,
};
use newsroom_shared::dto::{
    CreateAuthorRequest, CreateCommentRequest, CreateNewsRequest, CreateTagRequest,
    UpdateNewsRequest,
};

use super::{
    InMemoryAuthorRepository, InMemoryCommentRepository, InMemoryNewsRepository, InMemoryStore,
    InMemoryTagRepository,
};

struct Services {
    news: NewsService,
    authors: AuthorService,
    comments: CommentService,
    tags: TagService,
}

fn services() -> Services {
    services_over(Arc::new(InMemoryStore::new()))
}

fn services_over(store: Arc<InMemoryStore>) -> Services {
    let news: Arc<dyn NewsRepository> = Arc::new(InMemoryNewsRepository::new(store.clone()));
    let authors: Arc<dyn AuthorRepository> =
        Arc::new(InMemoryAuthorRepository::new(store.clone()));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(InMemoryCommentRepository::new(store.clone()));
    let tags: Arc<dyn TagRepository> = Arc::new(InMemoryTagRepository::new(store));

    Services {
        news: NewsService::new(news.clone(), authors.clone(), tags.clone()),
        authors: AuthorService::new(authors, news.clone()),
        comments: CommentService::new(comments, news.clone()),
        tags: TagService::new(tags, news),
    }
}

fn author(name: &str) -> CreateAuthorRequest {
    CreateAuthorRequest {
        name: Some(name.to_string()),
    }
}

fn news(title: &str, author_id: i64, tag_ids: Vec<i64>) -> CreateNewsRequest {
    CreateNewsRequest {
        title: Some(title.to_string()),
        content: Some(format!("{title} - full story")),
        author_id: Some(author_id),
        tag_ids,
    }
}

fn comment(content: &str, news_id: i64) -> CreateCommentRequest {
    CreateCommentRequest {
        content: Some(content.to_string()),
        news_id: Some(news_id),
    }
}

fn tag(name: &str) -> CreateTagRequest {
    CreateTagRequest {
        name: Some(name.to_string()),
    }
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, DomainError>, entity: &str, id: i64) {
    match result {
        Err(DomainError::NotFound { entity_type, id: missing }) => {
            assert_eq!(entity_type, entity);
            assert_eq!(missing, id);
        }
        other => panic!("expected {entity} {id} to be missing, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_assigns_ids_and_keeps_fields() {
    let s = services();

    let writer = s.authors.create(author("Ada")).await.unwrap();
    let label = s.tags.create(tag("science")).await.unwrap();
    let created = s
        .news
        .create(news("Rust 2024", writer.id, vec![label.id, label.id]))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, "Rust 2024");
    assert_eq!(created.content, "Rust 2024 - full story");
    assert_eq!(created.author_id, writer.id);
    assert_eq!(created.tag_ids, vec![label.id]);
    assert_eq!(s.news.get_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let s = services();

    assert_not_found(s.news.get_by_id(5).await, "News", 5);
    assert_not_found(s.authors.get_by_id(5).await, "Author", 5);
    assert_not_found(
        s.news.update(UpdateNewsRequest::default(), 5).await,
        "News",
        5,
    );
    assert_not_found(s.authors.list_by_news_id(5).await, "News", 5);
    assert_not_found(s.comments.list_by_news_id(5).await, "News", 5);
    assert_not_found(s.tags.list_by_news_id(5).await, "News", 5);

    assert!(!s.news.delete_by_id(5).await.unwrap());
    assert!(!s.tags.delete_by_id(5).await.unwrap());
}

#[tokio::test]
async fn test_references_must_exist() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();

    assert_not_found(s.news.create(news("Orphaned", 77, vec![])).await, "Author", 77);
    assert_not_found(
        s.news.create(news("Badly tagged", writer.id, vec![9])).await,
        "Tag",
        9,
    );
    assert_not_found(s.comments.create(comment("Hello there", 3)).await, "News", 3);
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let s = services();
    for name in ["Ada", "Grace", "Linus"] {
        s.authors.create(author(name)).await.unwrap();
    }

    let first = s.authors.list().await.unwrap();
    let second = s.authors.list().await.unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_partial_update_touches_only_given_fields() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let created = s.news.create(news("Original", writer.id, vec![])).await.unwrap();

    let updated = s
        .news
        .update(
            UpdateNewsRequest {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
            created.id,
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_news_scoped_listings() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let rust = s.tags.create(tag("rust")).await.unwrap();
    let _unused = s.tags.create(tag("golang")).await.unwrap();
    let story = s
        .news
        .create(news("Ferris wins", writer.id, vec![rust.id]))
        .await
        .unwrap();
    s.comments.create(comment("Great news!", story.id)).await.unwrap();
    s.comments.create(comment("Go Ferris!", story.id)).await.unwrap();

    let authors = s.authors.list_by_news_id(story.id).await.unwrap();
    assert_eq!(authors, vec![writer]);

    let tags = s.tags.list_by_news_id(story.id).await.unwrap();
    assert_eq!(tags, vec![rust]);

    let comments = s.comments.list_by_news_id(story.id).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c.news_id == story.id));
}

#[tokio::test]
async fn test_deleting_news_cascades_to_comments() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let story = s.news.create(news("Short lived", writer.id, vec![])).await.unwrap();
    let remark = s.comments.create(comment("First!", story.id)).await.unwrap();

    assert!(s.news.delete_by_id(story.id).await.unwrap());

    assert_not_found(s.comments.get_by_id(remark.id).await, "Comment", remark.id);
    assert_not_found(s.comments.list_by_news_id(story.id).await, "News", story.id);
    assert!(!s.news.delete_by_id(story.id).await.unwrap());
}

#[tokio::test]
async fn test_deleting_tag_unlinks_news() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let keep = s.tags.create(tag("keep")).await.unwrap();
    let dropped = s.tags.create(tag("drop")).await.unwrap();
    let story = s
        .news
        .create(news("Tagged story", writer.id, vec![keep.id, dropped.id]))
        .await
        .unwrap();

    assert!(s.tags.delete_by_id(dropped.id).await.unwrap());

    let story = s.news.get_by_id(story.id).await.unwrap();
    assert_eq!(story.tag_ids, vec![keep.id]);
}

#[tokio::test]
async fn test_deleting_author_cascades_to_news() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let other = s.authors.create(author("Grace")).await.unwrap();
    let gone = s.news.create(news("By Ada", writer.id, vec![])).await.unwrap();
    let kept = s.news.create(news("By Grace", other.id, vec![])).await.unwrap();

    assert!(s.authors.delete_by_id(writer.id).await.unwrap());

    assert_not_found(s.news.get_by_id(gone.id).await, "News", gone.id);
    assert_eq!(s.news.list().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let s = services();
    let first = s.tags.create(tag("first")).await.unwrap();
    s.tags.delete_by_id(first.id).await.unwrap();

    let second = s.tags.create(tag("second")).await.unwrap();
    assert!(second.id > first.id);
}

/// Tag lookups that report every tag as present, as if one had been deleted
/// between the existence check and the write.
struct StaleTags(InMemoryTagRepository);

#[async_trait]
impl BaseRepository<Tag, i64> for StaleTags {
    async fn find_all(&self) -> Result<Vec<Tag>, RepoError> {
        self.0.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn exists(&self, _id: i64) -> Result<bool, RepoError> {
        Ok(true)
    }

    async fn save(&self, entity: Tag) -> Result<Tag, RepoError> {
        self.0.save(entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.0.delete(id).await
    }
}

#[async_trait]
impl TagRepository for StaleTags {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, RepoError> {
        self.0.find_by_news_id(news_id).await
    }
}

#[tokio::test]
async fn test_failed_tag_link_leaves_no_news() {
    let store = Arc::new(InMemoryStore::new());
    let news_repo: Arc<dyn NewsRepository> = Arc::new(InMemoryNewsRepository::new(store.clone()));
    let authors: Arc<dyn AuthorRepository> =
        Arc::new(InMemoryAuthorRepository::new(store.clone()));
    let tags: Arc<dyn TagRepository> =
        Arc::new(StaleTags(InMemoryTagRepository::new(store.clone())));
    let service = NewsService::new(news_repo.clone(), authors.clone(), tags);

    let writer = AuthorService::new(authors, news_repo.clone())
        .create(author("Ada"))
        .await
        .unwrap();

    let result = service.create(news("Ghost tagged", writer.id, vec![9])).await;

    assert!(matches!(
        result,
        Err(DomainError::Repository(RepoError::Constraint(_)))
    ));
    assert!(news_repo.find_all().await.unwrap().is_empty());
    assert!(news_repo.find_tag_links().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_tag_link_keeps_previous_news_state() {
    let store = Arc::new(InMemoryStore::new());
    let s = services_over(store.clone());
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let story = s.news.create(news("Original", writer.id, vec![])).await.unwrap();

    let stale = NewsService::new(
        Arc::new(InMemoryNewsRepository::new(store.clone())),
        Arc::new(InMemoryAuthorRepository::new(store.clone())),
        Arc::new(StaleTags(InMemoryTagRepository::new(store))),
    );
    let result = stale
        .update(
            UpdateNewsRequest {
                title: Some("Renamed".to_string()),
                tag_ids: Some(vec![4]),
                ..Default::default()
            },
            story.id,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(s.news.get_by_id(story.id).await.unwrap(), story);
}

#[tokio::test]
async fn test_repository_rejects_dangling_references() {
    let store = Arc::new(InMemoryStore::new());
    let comments = InMemoryCommentRepository::new(store.clone());
    let news_repo = InMemoryNewsRepository::new(store);

    let orphan = Comment::new(42, "Nobody reads this".to_string());
    assert!(matches!(
        comments.save(orphan).await,
        Err(RepoError::Constraint(_))
    ));
    assert!(comments.find_all().await.unwrap().is_empty());

    let unauthored = newsroom_core::domain::News::new(7, "Title".to_string(), "Body".to_string());
    assert!(matches!(
        news_repo.save(unauthored).await,
        Err(RepoError::Constraint(_))
    ));
}

#[tokio::test]
async fn test_list_carries_each_news_tags() {
    let s = services();
    let writer = s.authors.create(author("Ada")).await.unwrap();
    let rust = s.tags.create(tag("rust")).await.unwrap();
    let web = s.tags.create(tag("web")).await.unwrap();
    let first = s
        .news
        .create(news("First", writer.id, vec![web.id, rust.id]))
        .await
        .unwrap();
    let second = s.news.create(news("Second", writer.id, vec![])).await.unwrap();
    let third = s.news.create(news("Third", writer.id, vec![web.id])).await.unwrap();

    let listed = s.news.list().await.unwrap();

    assert_eq!(listed, vec![first, second, third]);
    assert_eq!(listed[0].tag_ids, vec![rust.id, web.id]);
    assert!(listed[1].tag_ids.is_empty());
}
