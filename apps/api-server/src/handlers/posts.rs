//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use post_core::domain::{PostDraft, PostPatch};
use post_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create_post(PostDraft {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/v1/posts
pub async fn get_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch::new(req.title, req.content, req.author);
    if patch.is_empty() {
        tracing::debug!(post_id = %path, "Update carries no field changes");
    }

    let post = state.posts.update_post(&path, patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post(&path).await?;

    tracing::info!(post_id = %path, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
