//! Application state - services shared across all handlers.

use std::sync::Arc;

use actix_web::web;
use newsroom_core::ports::{AuthorRepository, CommentRepository, NewsRepository, TagRepository};
use newsroom_core::services::{AuthorService, CommentService, NewsService, TagService};
use newsroom_infra::database::DatabaseConfig;
use newsroom_infra::memory::{
    InMemoryAuthorRepository, InMemoryCommentRepository, InMemoryNewsRepository, InMemoryStore,
    InMemoryTagRepository,
};

#[cfg(feature = "postgres")]
use newsroom_infra::database::{
    DatabaseConnections, PostgresAuthorRepository, PostgresCommentRepository,
    PostgresNewsRepository, PostgresTagRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
    pub authors: Arc<AuthorService>,
    pub comments: Arc<CommentService>,
    pub tags: Arc<TagService>,
    /// Name of the active store backend.
    pub store: &'static str,
}

/// One repository per resource, all backed by the same store.
struct Repositories {
    news: Arc<dyn NewsRepository>,
    authors: Arc<dyn AuthorRepository>,
    comments: Arc<dyn CommentRepository>,
    tags: Arc<dyn TagRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            news: Arc::new(InMemoryNewsRepository::new(store.clone())),
            authors: Arc::new(InMemoryAuthorRepository::new(store.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(store.clone())),
            tags: Arc::new(InMemoryTagRepository::new(store)),
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(connections: &DatabaseConnections) -> Self {
        let db = &connections.main;
        Self {
            news: Arc::new(PostgresNewsRepository::new(db.clone())),
            authors: Arc::new(PostgresAuthorRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            tags: Arc::new(PostgresTagRepository::new(db.clone())),
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repositories, store) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => (Repositories::postgres(&connections), "postgres"),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Repositories::in_memory(), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Repositories::in_memory(), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repositories, store) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Repositories::in_memory(), "memory")
        };

        let state = Self::wire(repositories, store);
        tracing::info!(store = state.store, "Application state initialized");
        state
    }

    /// State over a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::wire(Repositories::in_memory(), "memory")
    }

    fn wire(repos: Repositories, store: &'static str) -> Self {
        Self {
            news: Arc::new(NewsService::new(
                repos.news.clone(),
                repos.authors.clone(),
                repos.tags.clone(),
            )),
            authors: Arc::new(AuthorService::new(repos.authors, repos.news.clone())),
            comments: Arc::new(CommentService::new(repos.comments, repos.news.clone())),
            tags: Arc::new(TagService::new(repos.tags, repos.news)),
            store,
        }
    }

    /// Register the state and each service as application data, so the
    /// generic resource handlers can extract `web::Data<S>`.
    pub fn configure_data(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clone()))
            .app_data(web::Data::from(self.news.clone()))
            .app_data(web::Data::from(self.authors.clone()))
            .app_data(web::Data::from(self.comments.clone()))
            .app_data(web::Data::from(self.tags.clone()));
    }
}
