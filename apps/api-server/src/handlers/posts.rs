//! Post resource handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_core::ports::BaseRepository;
use quill_shared::dto::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
///
/// Lists every post in persistence order. An empty collection is a
/// success, not an error.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
///
/// Field constraints are checked before the repository is touched; an
/// invalid payload persists nothing. The storage layer assigns the id
/// when the payload does not carry one.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();

    payload.validate().map_err(AppError::Validation)?;

    let post = Post {
        id: payload.id,
        user_id: payload.user_id,
        title: payload.title,
        body: payload.body,
        version: payload.version,
    };
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /api/posts/{id}
///
/// Replaces `title` and `body` of an existing record. The payload's own
/// `id`, `userId` and `version` are always discarded in favor of the
/// stored values.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let merged = existing.merged_with(payload.title, payload.body);
    let saved = state.posts.save(merged).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/posts/{id}
///
/// Unconditional: no existence check, 204 either way.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.posts.delete_by_id(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
