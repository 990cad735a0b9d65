//! In-memory post repository - used when no database is configured.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use post_core::domain::{Post, PostPatch};
use post_core::error::RepoError;
use post_core::ports::PostRepository;

/// In-memory post store using a HashMap behind a single async RwLock.
///
/// Reads share the lock, writes take it exclusively.
/// Note: Data is lost on process restart, and `get_all` has no defined order.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        match posts.entry(post.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Constraint(format!(
                "post {} already exists",
                post.id
            ))),
            Entry::Vacant(slot) => Ok(slot.insert(post).clone()),
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, RepoError> {
        let posts = self.posts.read().await;
        posts.get(id).cloned().ok_or(RepoError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(id).ok_or(RepoError::NotFound)?;

        post.apply(patch);
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use post_core::domain::PostDraft;

    use super::*;

    fn post(title: &str) -> Post {
        Post::new(PostDraft {
            title: title.to_string(),
            content: "content".to_string(),
            author: "author".to_string(),
        })
    }

    /// A post written an hour ago, so an update always moves `updated_at`.
    fn stale_post(title: &str) -> Post {
        let mut post = post(title);
        post.created_at -= Duration::hours(1);
        post.updated_at = post.created_at;
        post
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(post("A")).await.unwrap();

        let found = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.get_by_id("does-not-exist").await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(post("A")).await.unwrap();

        let result = repo.create(created.clone()).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.create(post("A")).await.unwrap();
        repo.create(post("B")).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_title_only() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(stale_post("A")).await.unwrap();

        let updated = repo
            .update(&created.id, PostPatch::new(Some("Z".to_string()), None, None))
            .await
            .unwrap();

        assert_eq!(updated.title, "Z");
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.author, created.author);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(repo.get_by_id(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_with_empty_patch() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(stale_post("A")).await.unwrap();

        let updated = repo
            .update(&created.id, PostPatch::new(Some(String::new()), None, None))
            .await
            .unwrap();

        assert!(updated.updated_at > created.updated_at);
        assert_eq!(
            Post {
                updated_at: created.updated_at,
                ..updated.clone()
            },
            created
        );
        assert_eq!(repo.get_by_id(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryPostRepository::new();
        let result = repo.update("missing", PostPatch::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(post("A")).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(matches!(
            repo.get_by_id(&created.id).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(
            repo.delete(&created.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(post(&format!("post-{i}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.get_all().await.unwrap().len(), 16);
    }
}
