//! Blog resource routes
//!
//! Listing and fetching are open; creation and deletion require a resolved
//! identity. Updating likes is deliberately open to any caller.

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::routes::{parse_id, unknown_endpoint};
use crate::services::BlogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bloglist_shared::types::{BlogResponse, BlogWithOwner, LikesUpdate, NewBlog};

/// Create blog routes
pub fn blogs_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_blogs).post(create_blog).fallback(unknown_endpoint),
        )
        .route(
            "/:id",
            get(get_blog)
                .put(update_likes)
                .delete(delete_blog)
                .fallback(unknown_endpoint),
        )
}

/// GET /api/blogs - List all blogs with reduced owner projections
async fn list_blogs(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogWithOwner>>> {
    let blogs = BlogService::list(state.db()).await?;
    Ok(Json(blogs))
}

/// GET /api/blogs/:id - Fetch a single blog
async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogResponse>> {
    let id = parse_id(&id)?;
    let blog = BlogService::get(state.db(), id).await?;
    Ok(Json(blog))
}

/// POST /api/blogs - Create a blog owned by the caller
///
/// # Authentication
/// Requires a valid Bearer token resolving to an existing user.
async fn create_blog(
    State(state): State<AppState>,
    identity: Identity,
    Json(req): Json<NewBlog>,
) -> ApiResult<(StatusCode, Json<BlogResponse>)> {
    let user = identity.require()?;
    let blog = BlogService::create(state.db(), &user, req).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/:id - Set the likes counter
async fn update_likes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LikesUpdate>,
) -> ApiResult<Json<BlogResponse>> {
    let id = parse_id(&id)?;
    let blog = BlogService::update_likes(state.db(), id, req.likes).await?;
    Ok(Json(blog))
}

/// DELETE /api/blogs/:id - Delete a blog the caller owns
///
/// Responds 204 whether or not a record was removed: a missing blog and a
/// blog owned by someone else are both acknowledged without effect.
///
/// # Authentication
/// Requires a valid Bearer token resolving to an existing user.
async fn delete_blog(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user = identity.require()?;
    let id = parse_id(&id)?;
    BlogService::delete(state.db(), &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
