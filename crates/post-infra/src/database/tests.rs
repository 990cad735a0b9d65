use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use post_core::domain::{Post, PostDraft, PostPatch};
use post_core::error::RepoError;
use post_core::ports::{DatabaseProbe, PostRepository};

use crate::database::entity::post;
use crate::database::{PostgresPostRepository, SeaOrmDatabaseProbe};

fn model(id: &str, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: id.to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: "Author".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_get_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("post-1", "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.get_by_id("post-1").await.unwrap();

    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, "post-1");
}

#[tokio::test]
async fn test_get_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(
        repo.get_by_id("missing").await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_create_post() {
    let post = Post::new(PostDraft {
        title: "A".to_owned(),
        content: "B".to_owned(),
        author: "C".to_owned(),
    });
    let stored = post::Model {
        id: post.id.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.clone(),
        created_at: post.created_at.into(),
        updated_at: post.updated_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let created = repo.create(post.clone()).await.unwrap();

    assert_eq!(created, post);
}

#[tokio::test]
async fn test_get_all_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("post-2", "Newer"), model("post-1", "Older")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.get_all().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Newer");
}

#[tokio::test]
async fn test_update_post() {
    let original = model("post-1", "Old");
    let mut updated = original.clone();
    updated.title = "New".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![original.clone()], vec![updated]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo
        .update("post-1", PostPatch::new(Some("New".to_owned()), None, None))
        .await
        .unwrap();

    assert_eq!(post.title, "New");
    assert_eq!(post.content, original.content);
}

#[tokio::test]
async fn test_update_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo.update("missing", PostPatch::default()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    repo.delete("post-1").await.unwrap();
    assert!(matches!(
        repo.delete("post-1").await,
        Err(RepoError::NotFound)
    ));
}

#[test]
fn test_mock_connection_has_no_pool_stats() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let probe = SeaOrmDatabaseProbe::new(db);

    assert!(probe.pool_stats().is_none());
}
