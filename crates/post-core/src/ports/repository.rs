use async_trait::async_trait;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;

/// Post repository - the storage capability set shared by every backend.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Fails if a post with the same ID already exists.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its ID.
    async fn get_by_id(&self, id: &str) -> Result<Post, RepoError>;

    /// List all posts. Ordering is backend-defined.
    async fn get_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Apply a partial update and return the stored result.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError>;

    /// Delete a post by its ID.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}
