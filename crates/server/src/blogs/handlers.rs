//! Blog handlers

use crate::core::body::JsonBody;
use crate::core::config::AppState;
use crate::core::ctx::Ctx;
use crate::core::error::{Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bloglist_core::api::{LikesUpdate, NewBlog};
use bloglist_core::{ensure_owner, BlogId, BlogRecord, BlogView, CoreError};
use tracing::{info, warn};

/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> Json<Vec<BlogView>> {
    info!("GET /api/blogs");
    Json(state.store.list_blog_views().await)
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogView>> {
    info!("GET /api/blogs/{}", id);
    let id = BlogId::parse(&id)?;
    view_or_not_found(&state, id).await
}

/// POST /api/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    ctx: Ctx,
    JsonBody(req): JsonBody<NewBlog>,
) -> Result<(StatusCode, Json<BlogRecord>)> {
    info!("POST /api/blogs - by {}", ctx.username());

    let valid = req.validate()?;

    let owner = state
        .store
        .get_user(ctx.user_id())
        .await
        .ok_or(Error::AuthFailUserGone)?;

    let blog = state
        .store
        .insert_blog(BlogRecord::new(
            valid.title,
            valid.author,
            valid.url,
            valid.likes,
            Some(owner.id),
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/{id}
///
/// Full replacement; only the owner may do it. The body is validated
/// after the existence and ownership checks.
pub async fn update_blog(
    State(state): State<AppState>,
    ctx: Ctx,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<NewBlog>,
) -> Result<Json<BlogView>> {
    info!("PUT /api/blogs/{} - by {}", id, ctx.username());
    let id = BlogId::parse(&id)?;

    let caller = ctx.user_id().to_string();
    state
        .store
        .replace_blog(id, |blog| {
            ensure_owner(Some(&caller), blog)?;
            req.validate()
        })
        .await
        .inspect_err(|e| warn!("Update of blog {} refused: {}", id, e))?;

    view_or_not_found(&state, id).await
}

/// PUT /api/blogs/{id}/likes
pub async fn update_likes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<LikesUpdate>,
) -> Result<Json<BlogView>> {
    info!("PUT /api/blogs/{}/likes - {}", id, req.likes);
    let id = BlogId::parse(&id)?;
    let likes = req.validate()?;

    state.store.set_likes(id, likes).await?;

    view_or_not_found(&state, id).await
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    State(state): State<AppState>,
    ctx: Ctx,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    info!("DELETE /api/blogs/{} - by {}", id, ctx.username());
    let id = BlogId::parse(&id)?;

    let caller = ctx.user_id().to_string();
    state
        .store
        .delete_blog(id, |blog| ensure_owner(Some(&caller), blog).map(|_| ()))
        .await
        .inspect_err(|e| warn!("Deletion of blog {} refused: {}", id, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn view_or_not_found(state: &AppState, id: BlogId) -> Result<Json<BlogView>> {
    state
        .store
        .get_blog_view(id)
        .await
        .map(Json)
        .ok_or_else(|| CoreError::blog_not_found().into())
}
