//! User resource routes

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use bloglist_shared::types::{NewUser, UserResponse, UserWithBlogs};

/// Create user routes
pub fn users_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_users)
            .post(register)
            .fallback(crate::routes::unknown_endpoint),
    )
}

/// POST /api/users - Register a new user
///
/// # Performance
/// Password hashing is offloaded to the blocking thread pool.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::register(state.db(), req).await?;
    Ok(Json(user))
}

/// GET /api/users - List users with their owned blogs reduced to {title, url}
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserWithBlogs>>> {
    let users = UserService::list(state.db()).await?;
    Ok(Json(users))
}
