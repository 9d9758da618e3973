#[cfg(test)]
mod tests {
    use crate::database::entity::{comment, news, news_tag, tag};
    use crate::database::postgres_repo::{
        PostgresCommentRepository, PostgresNewsRepository, PostgresTagRepository,
    };
    use newsroom_core::domain::{News, Tag};
    use newsroom_core::error::RepoError;
    use newsroom_core::ports::{BaseRepository, CommentRepository, NewsRepository, TagRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn news_model(id: i64, title: &str) -> news::Model {
        let now = chrono::Utc::now();
        news::Model {
            id,
            author_id: 1,
            title: title.to_owned(),
            content: "Content of the story".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_news_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![news_model(42, "Test News")]])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);

        let result: Option<News> = repo.find_by_id(42).await.unwrap();

        let news = result.unwrap();
        assert_eq!(news.title, "Test News");
        assert_eq!(news.id, 42);
        assert_eq!(news.author_id, 1);
    }

    #[tokio::test]
    async fn test_save_new_news_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![news_model(7, "Fresh story")]])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);
        let unsaved = News::new(1, "Fresh story".to_owned(), "Content of the story".to_owned());

        let saved: News = repo.save(unsaved).await.unwrap();

        assert_eq!(saved.id, 7);
        assert!(!saved.is_new());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);

        let result = BaseRepository::<News, i64>::delete(&repo, 99).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_tag_ids_of_news() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                news_tag::Model {
                    news_id: 3,
                    tag_id: 1,
                },
                news_tag::Model {
                    news_id: 3,
                    tag_id: 4,
                },
            ]])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);

        assert_eq!(repo.find_tag_ids(3).await.unwrap(), vec![1, 4]);
    }

    #[tokio::test]
    async fn test_find_tag_links_of_all_news() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                news_tag::Model {
                    news_id: 1,
                    tag_id: 2,
                },
                news_tag::Model {
                    news_id: 3,
                    tag_id: 2,
                },
            ]])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);

        assert_eq!(repo.find_tag_links().await.unwrap(), vec![(1, 2), (3, 2)]);
    }

    #[tokio::test]
    async fn test_save_with_tags_writes_row_and_links() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![news_model(7, "Fresh story")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);
        let unsaved = News::new(1, "Fresh story".to_owned(), "Content of the story".to_owned());

        let saved = repo.save_with_tags(unsaved, Some(&[][..])).await.unwrap();

        assert_eq!(saved.id, 7);
        assert_eq!(saved.title, "Fresh story");
    }

    #[tokio::test]
    async fn test_save_with_tags_surfaces_write_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "violates foreign key constraint".to_owned(),
            )])
            .into_connection();

        let repo = PostgresNewsRepository::new(db);
        let unsaved = News::new(99, "Orphan".to_owned(), "No author".to_owned());

        let result = repo.save_with_tags(unsaved, Some(&[1][..])).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_find_comments_by_news_id() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![comment::Model {
                id: 10,
                news_id: 3,
                content: "Nice article".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);

        let comments = repo.find_by_news_id(3).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].news_id, 3);
        assert_eq!(comments[0].content, "Nice article");
    }

    #[tokio::test]
    async fn test_find_tags_by_news_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                tag::Model {
                    id: 1,
                    name: "politics".to_owned(),
                },
                tag::Model {
                    id: 4,
                    name: "economy".to_owned(),
                },
            ]])
            .into_connection();

        let repo = PostgresTagRepository::new(db);

        let tags: Vec<Tag> = repo.find_by_news_id(3).await.unwrap();
        assert_eq!(
            tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["politics", "economy"]
        );
    }
}
