//! Recommendation service: watch history in, recommended titles out
//!
//! Quota exhaustion and timeouts at the upstream surface as the typed
//! fallback outcome and are answered with the fixed list. Anything else
//! the upstream does wrong is logged here and mapped to a generic error,
//! so raw upstream text never reaches a caller.

use crate::error::ApiError;
use crate::recommender::{fallback_titles, RecommendationOutcome, RecommendationProvider};
use crate::repositories::BookingRepository;
use cinebook_shared::types::WatchedMovie;
use sqlx::PgPool;
use tracing::{error, info};

/// Recommendations derived from a user's booking history
#[derive(Debug, Clone)]
pub enum UserRecommendations {
    /// The user has no bookings, so there is no history to recommend from
    NoBookings,
    /// History plus the recommended titles
    Ready {
        watched_movies: Vec<WatchedMovie>,
        recommendations: Vec<String>,
    },
}

/// Recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Recommend titles from a user's watched history
    ///
    /// A user without bookings gets `NoBookings` and the upstream is
    /// never contacted.
    pub async fn for_user(
        pool: &PgPool,
        provider: &dyn RecommendationProvider,
        user_id: i64,
    ) -> Result<UserRecommendations, ApiError> {
        let watched = BookingRepository::watched_movies(pool, user_id).await?;

        if watched.is_empty() {
            return Ok(UserRecommendations::NoBookings);
        }

        let watched_movies: Vec<WatchedMovie> = watched
            .into_iter()
            .map(|record| WatchedMovie {
                title: record.title,
                genre: record.genre,
            })
            .collect();

        let recommendations = Self::recommend(provider, &watched_movies).await?;

        Ok(UserRecommendations::Ready {
            watched_movies,
            recommendations,
        })
    }

    /// Recommend titles for an explicit watched list
    pub async fn recommend(
        provider: &dyn RecommendationProvider,
        watched: &[WatchedMovie],
    ) -> Result<Vec<String>, ApiError> {
        if watched.is_empty() {
            return Err(ApiError::Validation(
                "Watched movie list cannot be empty".to_string(),
            ));
        }

        match provider.recommend(watched).await {
            Ok(RecommendationOutcome::Generated(titles)) => Ok(titles),
            Ok(RecommendationOutcome::Fallback) => {
                info!(provider = provider.name(), "Serving fallback recommendations");
                Ok(fallback_titles())
            }
            Err(e) => {
                error!(provider = provider.name(), error = ?e, "Recommendation upstream failed");
                Err(ApiError::RecommendationUnavailable)
            }
        }
    }
}
