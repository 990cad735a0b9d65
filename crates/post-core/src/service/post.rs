use std::sync::Arc;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post use cases on top of a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate a draft, build a new post from it and store it.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate()?;

        let post = Post::new(draft);
        tracing::debug!(post_id = %post.id, "Creating post");
        Ok(self.repo.create(post).await?)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))
    }

    pub async fn get_all_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post, DomainError> {
        self.repo
            .update(id, patch)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))
    }
}
