//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set, SqlErr,
};

use post_core::domain::{Post, PostPatch};
use post_core::error::RepoError;
use post_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Update reads the row and then writes it with `RETURNING`; the two
/// statements are not wrapped in a transaction, so a concurrent delete
/// between them surfaces as `NotFound`.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find(&self, id: &str) -> Result<post::Model, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        _ => RepoError::Query(err.to_string()),
    }
}

fn insert_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => query_error(err),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, "Inserting post");

        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(insert_error)?;

        Ok(model.into())
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, RepoError> {
        Ok(self.find(id).await?.into())
    }

    async fn get_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Post, RepoError> {
        let mut active_model = self.find(id).await?.into_active_model();

        if let Some(title) = patch.title() {
            active_model.title = Set(title.to_owned());
        }
        if let Some(content) = patch.content() {
            active_model.content = Set(content.to_owned());
        }
        if let Some(author) = patch.author() {
            active_model.author = Set(author.to_owned());
        }
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model.update(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
