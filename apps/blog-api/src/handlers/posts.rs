//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{NewPost, PostId, PostPatch};
use blog_core::error::RepoError;
use blog_shared::MessageResponse;
use blog_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn not_found(id: PostId) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// Surface a store miss as a 404 naming the post.
fn map_repo_error(id: PostId) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.title, req.content, req.author);
    new_post.validate()?;

    let post = state.posts.create(new_post).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = post.id,
        "Post created"
    );

    Ok(HttpResponse::Created().json(post))
}

/// PATCH /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    if patch.is_empty() {
        tracing::debug!(post_id = id, "Update carries no non-empty fields");
    }

    let post = state
        .posts
        .update(id, patch)
        .await
        .map_err(map_repo_error(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(map_repo_error(id))?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}
