//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, Post};
use blog_shared::dto::{CreatePostRequest, CreatePostResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        slug: post.slug,
        created_at: post.created_at,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate before touching the store
    let new_post = NewPost::parse(req.title, req.content)?;

    let post = state
        .posts
        .create(new_post.title, new_post.content)
        .await
        .inspect_err(|e| {
            if e.is_duplicate_slug() {
                tracing::info!(error = %e, "Rejected duplicate post");
            }
        })?;

    tracing::info!(slug = %post.slug, id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(CreatePostResponse::created(to_response(post))))
}

/// GET /posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state.posts.find_by_slug(&slug).await?.ok_or_else(|| {
        tracing::debug!(slug = %slug, "Post not found");
        AppError::NotFound("Post not found".to_string())
    })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}
