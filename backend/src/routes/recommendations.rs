//! Recommendation routes
//!
//! Relays a watched-movie history to the configured provider. The
//! per-user route derives history from booking records; the ad-hoc
//! route takes an explicit watched list in the request body.

use crate::error::ApiResult;
use crate::services::{RecommendationService, UserRecommendations};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use cinebook_shared::types::{
    MessageResponse, RecommendedMoviesResponse, UserRecommendationsResponse, WatchedMovie,
};

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/recommendations",
            get(recommendations_for_user),
        )
        .route("/recommendations", post(recommend_for_watched))
}

/// Recommend movies from a user's booking history
///
/// GET /api/v1/users/:user_id/recommendations
///
/// A user without bookings gets a plain message; the upstream is never
/// contacted for them.
async fn recommendations_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Response> {
    let outcome =
        RecommendationService::for_user(state.db(), state.recommender(), user_id).await?;

    let response = match outcome {
        UserRecommendations::NoBookings => Json(MessageResponse {
            message: "No bookings found for this user.".to_string(),
        })
        .into_response(),
        UserRecommendations::Ready {
            watched_movies,
            recommendations,
        } => Json(UserRecommendationsResponse {
            user_id,
            watched_movies,
            recommendations,
        })
        .into_response(),
    };

    Ok(response)
}

/// Recommend movies for an explicit watched list
///
/// POST /api/v1/recommendations
async fn recommend_for_watched(
    State(state): State<AppState>,
    Json(watched): Json<Vec<WatchedMovie>>,
) -> ApiResult<Json<RecommendedMoviesResponse>> {
    let recommended_movies =
        RecommendationService::recommend(state.recommender(), &watched).await?;

    Ok(Json(RecommendedMoviesResponse { recommended_movies }))
}
