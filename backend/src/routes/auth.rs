//! Authentication routes
//!
//! Provides endpoints for user signup, login, and current-user lookup.
//!
//! # Performance Optimizations
//!
//! - Uses pre-computed JWT keys from AppState (no per-request allocation)
//! - Password hashing runs on blocking thread pool (doesn't block async runtime)

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use cinebook_shared::types::{LoginRequest, LoginResponse, SignupRequest, UserView};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /api/v1/auth/signup
///
/// # Performance
/// Password hashing is offloaded to blocking thread pool.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserView>)> {
    let user = UserService::signup(state.db(), &req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
///
/// # Performance
/// Password verification is offloaded to blocking thread pool.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = UserService::login(state.db(), state.jwt(), &req).await?;
    Ok(Json(response))
}

/// Get the current user (requires authentication)
///
/// GET /api/v1/auth/me
///
/// # Authentication
/// Requires valid Bearer token in Authorization header.
async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<UserView>> {
    let user = UserService::profile(state.db(), auth_user.user_id).await?;
    Ok(Json(user))
}
