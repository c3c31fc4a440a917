//! Authentication middleware
//!
//! Provides the Axum extractor for JWT validation and user extraction.
//!
//! Every failure collapses into the same generic 401: the response does
//! not say whether the header was missing, the scheme was wrong, the
//! signature was bad or the token expired. The cause is logged at debug
//! level only.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

/// Authenticated user extracted from a verified JWT
///
/// This extractor validates the bearer token and extracts the identity
/// it carries. It uses the pre-computed JWT keys from AppState for
/// efficiency.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Authentication)?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Authentication)?;

        // Use pre-computed JWT service from state (no allocation!)
        let identity = app_state.jwt().resolve(token).map_err(|e| {
            debug!("Token resolution failed: {}", e);
            ApiError::Authentication
        })?;

        Ok(AuthUser {
            user_id: identity.user_id,
            role: identity.role,
        })
    }
}
