//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user account. The password hash never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Login response: bearer token plus the public user view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserView,
}

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieView {
    pub id: i64,
    pub title: String,
    pub genre: String,
}

/// Booking creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub show_id: i64,
    pub seats: i32,
}

/// Booking confirmation returned on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: i64,
    pub show_id: i64,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

/// Booking listed with its show time and movie title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingView {
    pub id: i64,
    pub movie_title: String,
    pub starts_at: DateTime<Utc>,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

/// One entry of a watched-movie history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchedMovie {
    pub title: String,
    pub genre: String,
}

/// Recommendations derived from a user's booking history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecommendationsResponse {
    pub user_id: i64,
    pub watched_movies: Vec<WatchedMovie>,
    pub recommendations: Vec<String>,
}

/// Recommendations for an explicit watched list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedMoviesResponse {
    pub recommended_movies: Vec<String>,
}

/// Generic message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
