//! Login route

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use bloglist_shared::types::{LoginRequest, LoginResponse};

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/", post(login).fallback(crate::routes::unknown_endpoint))
}

/// POST /api/login - Exchange credentials for a bearer token
///
/// # Performance
/// Password verification is offloaded to the blocking thread pool.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response =
        UserService::login(state.db(), state.tokens(), &req.username, &req.password).await?;
    Ok(Json(response))
}
