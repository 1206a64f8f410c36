use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

use crate::database::connections::{DatabaseConfig, DocumentStore};
use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str, slug: &str) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        slug: slug.to_owned(),
        created_at: chrono::Utc::now().into(),
    }
}

fn repo(db: MockDatabase) -> PostgresPostRepository {
    PostgresPostRepository::new(Arc::new(DocumentStore::from_connection(db.into_connection())))
}

#[tokio::test]
async fn test_list_all_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
        model("First", "first"),
        model("Second", "second"),
    ]]);

    let posts = repo(db).list_all().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "first");
    assert_eq!(posts[1].title, "Second");
}

#[tokio::test]
async fn test_list_all_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()]);

    assert!(repo(db).list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_post_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("My First Post", "my-first-post")]]);

    let post = repo(db).find_by_slug("my-first-post").await.unwrap().unwrap();

    assert_eq!(post.title, "My First Post");
    assert_eq!(post.slug, "my-first-post");
}

#[tokio::test]
async fn test_find_unknown_slug_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()]);

    assert!(repo(db).find_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_returns_stored_record() {
    let stored = model("Hello World", "hello-world");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]]);

    let post = repo(db)
        .create("Hello World".to_string(), "Content".to_string())
        .await
        .unwrap();

    assert_eq!(post.id, stored.id);
    assert_eq!(post.slug, "hello-world");
}

#[tokio::test]
async fn test_create_unique_violation_is_duplicate_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![DbErr::Query(
        RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"posts_slug_key\"".to_string(),
        ),
    )]);

    let err = repo(db)
        .create("Hello World".to_string(), "Content".to_string())
        .await
        .unwrap_err();

    match err {
        RepoError::DuplicateSlug(slug) => assert_eq!(slug, "hello-world"),
        other => panic!("expected DuplicateSlug, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_other_failure_is_persistence() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![DbErr::Query(
        RuntimeErr::Internal("value too long for type".to_string()),
    )]);

    let err = repo(db)
        .create("Title".to_string(), "Content".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Persistence(_)));
}

#[tokio::test]
async fn test_read_connection_error_is_store_unavailable() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![DbErr::Conn(
        RuntimeErr::Internal("connection refused".to_string()),
    )]);

    let err = repo(db).list_all().await.unwrap_err();

    assert!(matches!(err, RepoError::StoreUnavailable(_)));
}

#[tokio::test]
async fn test_unconfigured_store_fails_every_operation() {
    let repo = PostgresPostRepository::new(Arc::new(DocumentStore::new(DatabaseConfig::default())));

    assert!(matches!(
        repo.list_all().await,
        Err(RepoError::StoreUnavailable(_))
    ));
    assert!(matches!(
        repo.find_by_slug("x").await,
        Err(RepoError::StoreUnavailable(_))
    ));
    assert!(matches!(
        repo.create("t".into(), "c".into()).await,
        Err(RepoError::StoreUnavailable(_))
    ));
}
