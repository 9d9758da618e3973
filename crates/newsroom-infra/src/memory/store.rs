use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use newsroom_core::domain::{Author, Comment, News, Tag, UNSAVED_ID};
use newsroom_core::error::RepoError;
use newsroom_core::ports::{
    AuthorRepository, BaseRepository, CommentRepository, NewsRepository, TagRepository,
};

/// All tables of the store. Every map is keyed and therefore ordered by id.
#[derive(Default)]
pub struct Tables {
    news: BTreeMap<i64, News>,
    authors: BTreeMap<i64, Author>,
    comments: BTreeMap<i64, Comment>,
    tags: BTreeMap<i64, Tag>,
    /// `(news_id, tag_id)` pairs.
    news_tags: BTreeSet<(i64, i64)>,
    sequences: Sequences,
}

/// Id sequences; ids are never reused after a delete.
#[derive(Default)]
struct Sequences {
    news: i64,
    authors: i64,
    comments: i64,
    tags: i64,
}

fn next(sequence: &mut i64) -> i64 {
    *sequence += 1;
    *sequence
}

impl Tables {
    fn remove_news(&mut self, news_id: i64) -> bool {
        if self.news.remove(&news_id).is_none() {
            return false;
        }
        self.comments.retain(|_, comment| comment.news_id != news_id);
        self.news_tags.retain(|&(linked, _)| linked != news_id);
        true
    }
}

/// Entities the in-memory store knows how to keep, including the cascade
/// each one triggers on delete.
pub trait Stored: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn assign_id(&mut self, tables: &mut Tables);
    fn table(tables: &Tables) -> &BTreeMap<i64, Self>;
    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self>;

    /// Fail with [`RepoError::Constraint`] when a referenced row is missing.
    fn check_references(&self, _tables: &Tables) -> Result<(), RepoError> {
        Ok(())
    }

    /// Remove the row and everything depending on it.
    fn remove(tables: &mut Tables, id: i64) -> bool {
        Self::table_mut(tables).remove(&id).is_some()
    }
}

/// Insert or overwrite one row; the caller holds the write lock.
fn save_row<T: Stored>(tables: &mut Tables, mut entity: T) -> Result<T, RepoError> {
    if entity.id() != UNSAVED_ID && !T::table(tables).contains_key(&entity.id()) {
        return Err(RepoError::NotFound);
    }
    entity.check_references(tables)?;

    if entity.id() == UNSAVED_ID {
        entity.assign_id(tables);
    }
    T::table_mut(tables).insert(entity.id(), entity.clone());
    Ok(entity)
}

impl Stored for News {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, tables: &mut Tables) {
        self.id = next(&mut tables.sequences.news);
    }

    fn table(tables: &Tables) -> &BTreeMap<i64, Self> {
        &tables.news
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self> {
        &mut tables.news
    }

    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        if !tables.authors.contains_key(&self.author_id) {
            return Err(RepoError::Constraint(format!(
                "Author {} does not exist",
                self.author_id
            )));
        }
        Ok(())
    }

    fn remove(tables: &mut Tables, id: i64) -> bool {
        tables.remove_news(id)
    }
}

impl Stored for Author {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, tables: &mut Tables) {
        self.id = next(&mut tables.sequences.authors);
    }

    fn table(tables: &Tables) -> &BTreeMap<i64, Self> {
        &tables.authors
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self> {
        &mut tables.authors
    }

    fn remove(tables: &mut Tables, id: i64) -> bool {
        if tables.authors.remove(&id).is_none() {
            return false;
        }
        let written: Vec<i64> = tables
            .news
            .values()
            .filter(|news| news.author_id == id)
            .map(|news| news.id)
            .collect();
        for news_id in written {
            tables.remove_news(news_id);
        }
        true
    }
}

impl Stored for Comment {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, tables: &mut Tables) {
        self.id = next(&mut tables.sequences.comments);
    }

    fn table(tables: &Tables) -> &BTreeMap<i64, Self> {
        &tables.comments
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self> {
        &mut tables.comments
    }

    fn check_references(&self, tables: &Tables) -> Result<(), RepoError> {
        if !tables.news.contains_key(&self.news_id) {
            return Err(RepoError::Constraint(format!(
                "News {} does not exist",
                self.news_id
            )));
        }
        Ok(())
    }
}

impl Stored for Tag {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, tables: &mut Tables) {
        self.id = next(&mut tables.sequences.tags);
    }

    fn table(tables: &Tables) -> &BTreeMap<i64, Self> {
        &tables.tags
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<i64, Self> {
        &mut tables.tags
    }

    fn remove(tables: &mut Tables, id: i64) -> bool {
        if tables.tags.remove(&id).is_none() {
            return false;
        }
        tables.news_tags.retain(|&(_, linked)| linked != id);
        true
    }
}

/// In-memory store using ordered maps behind a single async RwLock.
///
/// Mirrors the cascades of the relational schema.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generic in-memory repository over one table of a shared [`InMemoryStore`].
pub struct InMemoryRepository<T> {
    store: Arc<InMemoryStore>,
    _entity: PhantomData<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

pub type InMemoryNewsRepository = InMemoryRepository<News>;
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;
pub type InMemoryTagRepository = InMemoryRepository<Tag>;

#[async_trait]
impl<T: Stored> BaseRepository<T, i64> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(T::table(&tables).values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(T::table(&tables).get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(T::table(&tables).contains_key(&id))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut tables = self.store.tables.write().await;
        save_row(&mut tables, entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if T::remove(&mut tables, id) {
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn find_tag_ids(&self, news_id: i64) -> Result<Vec<i64>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .news_tags
            .range((news_id, i64::MIN)..=(news_id, i64::MAX))
            .map(|&(_, tag_id)| tag_id)
            .collect())
    }

    async fn find_tag_links(&self) -> Result<Vec<(i64, i64)>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.news_tags.iter().copied().collect())
    }

    async fn save_with_tags(
        &self,
        news: News,
        tag_ids: Option<&[i64]>,
    ) -> Result<News, RepoError> {
        let mut tables = self.store.tables.write().await;

        // Links are validated before any write.
        if let Some(missing) = tag_ids
            .unwrap_or_default()
            .iter()
            .find(|&&id| !tables.tags.contains_key(&id))
        {
            return Err(RepoError::Constraint(format!("Tag {missing} does not exist")));
        }

        let saved = save_row(&mut tables, news)?;
        if let Some(tag_ids) = tag_ids {
            tables.news_tags.retain(|&(linked, _)| linked != saved.id);
            tables
                .news_tags
                .extend(tag_ids.iter().map(|&tag_id| (saved.id, tag_id)));
        }
        Ok(saved)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|comment| comment.news_id == news_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .news_tags
            .range((news_id, i64::MIN)..=(news_id, i64::MAX))
            .filter_map(|(_, tag_id)| tables.tags.get(tag_id).cloned())
            .collect())
    }
}
