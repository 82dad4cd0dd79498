//! Post handlers - a thin mapping from HTTP onto `PostRepository`.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostInput};
use quill_shared::ApiResponse;
use quill_shared::dto::{PostRequest, PostResponse, SearchParams};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_input(req: PostRequest) -> PostInput {
    PostInput {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags,
    }
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        tags: post.tags,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

fn post_list(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(post_response).collect()
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_list(posts))))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(post_input(body.into_inner())).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/posts/{}", post.id)))
        .json(ApiResponse::ok_with_message(post_response(post), "Post created")))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.get(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(&id, post_input(body.into_inner())).await?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    state.posts.delete(&id).await?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/search?q=
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search(params.q.as_deref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_list(posts))))
}
